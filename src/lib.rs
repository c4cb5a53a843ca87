//! 3D print quoting
//!
//! Turns part and business parameters (volume or weight, material, machine
//! time, waste, margin, tax) into a cost breakdown with unit and total
//! price, and renders it for the terminal, clipboard, text export or HTTP.

pub mod config;
pub mod currency;
pub mod error;
pub mod handlers;
pub mod materials;
pub mod metrics;
pub mod presenter;
pub mod pricing;
pub mod quote;
pub mod server;
pub mod signals;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` wins over `level`. `format` is "json" or "plain"; logs go
/// to stderr so command output on stdout stays clean.
/// This function can only be called once.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
