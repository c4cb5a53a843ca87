use arc_swap::ArcSwap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::config::load_config;
use crate::error::AppError;
use crate::quote::QuoteContext;

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task
///
/// Handles:
/// - SIGTERM/SIGINT: Graceful shutdown
/// - SIGHUP: Reload material catalog and shop defaults
#[cfg(unix)]
pub fn setup_signal_handlers(
    context: Arc<ArcSwap<QuoteContext>>,
    config_path: Option<PathBuf>,
) -> Result<(broadcast::Sender<ShutdownSignal>, tokio::task::JoinHandle<()>), AppError> {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let install = |kind: SignalKind, name: &str| {
        signal(kind)
            .map_err(|e| AppError::Internal(format!("Failed to setup {} handler: {}", name, e)))
    };
    let mut sigterm = install(SignalKind::terminate(), "SIGTERM")?;
    let mut sigint = install(SignalKind::interrupt(), "SIGINT")?;
    let mut sighup = install(SignalKind::hangup(), "SIGHUP")?;

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("SIGTERM received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sigint.recv() => {
                    info!("SIGINT received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sighup.recv() => {
                    info!("SIGHUP received, reloading configuration");
                    match reload_context(&context, config_path.as_deref()) {
                        Ok(()) => info!("Configuration reloaded successfully"),
                        Err(e) => error!("Failed to reload configuration, keeping previous: {}", e),
                    }
                }
            }
        }
    });

    Ok((shutdown_tx, handle))
}

/// Windows: only Ctrl+C is supported, no reload
#[cfg(not(unix))]
pub fn setup_signal_handlers(
    _context: Arc<ArcSwap<QuoteContext>>,
    _config_path: Option<PathBuf>,
) -> Result<(broadcast::Sender<ShutdownSignal>, tokio::task::JoinHandle<()>), AppError> {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, initiating shutdown");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });

    Ok((shutdown_tx, handle))
}

/// Load and validate configuration, then swap in the new quote context
///
/// On any failure the previous context stays in place.
pub fn reload_context(
    context: &ArcSwap<QuoteContext>,
    config_path: Option<&std::path::Path>,
) -> Result<(), AppError> {
    let cfg = load_config(config_path)?;
    let next = QuoteContext::from_config(&cfg);

    info!(
        materials = next.materials.len(),
        currency = next.defaults.currency.as_deref().unwrap_or("COP"),
        "Swapping quote context"
    );
    context.store(Arc::new(next));

    Ok(())
}
