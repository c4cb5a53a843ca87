use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use print_quote::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Logging needs the configured level, so configuration loads first
    let loaded = config::load_config(args.config.as_deref());
    match &loaded {
        Ok(cfg) => init_tracing(&cfg.server.log_level, &cfg.server.log_format),
        Err(_) => init_tracing("info", "plain"),
    }
    let cfg = loaded?;

    match args.command {
        cli::Commands::Quote(quote_args) => commands::quote::execute(&quote_args, &cfg)?,
        cli::Commands::Materials => commands::materials::execute(&cfg),
        cli::Commands::Serve => commands::serve::execute(cfg, args.config).await?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg),
        },
        cli::Commands::Version => {
            println!("print-quote v{}", env!("CARGO_PKG_VERSION"));
            println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
        }
    }

    Ok(())
}
