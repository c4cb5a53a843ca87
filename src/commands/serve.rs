use anyhow::Result;
use colored::Colorize;
use print_quote::{config::Config, server};
use std::path::PathBuf;
use tracing::info;

/// Execute the serve command
///
/// Runs the HTTP API in the foreground until SIGINT/SIGTERM.
pub async fn execute(cfg: Config, config_path: Option<PathBuf>) -> Result<()> {
    println!(
        "{} http://{}:{}",
        "Starting print-quote API on".green(),
        cfg.server.host,
        cfg.server.port
    );
    info!("Starting print-quote API in foreground mode");

    server::start_server(cfg, config_path).await
}
