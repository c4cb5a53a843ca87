//! HTTP handlers
//!
//! The JSON API mirrors the quote form: a body of raw field values goes in,
//! a breakdown with formatted rows and the summary text comes out.

pub mod health;
pub mod materials;
pub mod metrics_handler;
pub mod quote;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::presenter::Presenter;
use crate::quote::QuoteContext;

/// Shared handler state
///
/// The context sits behind `ArcSwap` so a configuration reload replaces the
/// catalog and shop defaults without blocking requests.
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<ArcSwap<QuoteContext>>,
    pub presenter: Presenter,
}

impl AppState {
    pub fn new(context: QuoteContext) -> Self {
        Self {
            context: Arc::new(ArcSwap::from_pointee(context)),
            presenter: Presenter::default(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_state() -> AppState {
        AppState::new(QuoteContext::default())
    }
}
