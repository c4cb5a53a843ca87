use anyhow::Result;
use colored::Colorize;
use print_quote::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration (file, environment and defaults merged)
pub fn show(cfg: &Config) -> Result<()> {
    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this prints a summary
pub fn validate(cfg: &Config) {
    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Server: {}:{}", cfg.server.host, cfg.server.port);
    println!("  Materials: {}", cfg.materials.len());
    println!(
        "  Default currency: {}",
        cfg.defaults.currency.as_deref().unwrap_or("COP")
    );
    println!(
        "  Default material: {}",
        cfg.defaults.material.as_deref().unwrap_or("(none)")
    );
    println!(
        "  Metrics: {}",
        if cfg.metrics.enabled {
            "enabled".green()
        } else {
            "disabled".red()
        }
    );

    info!("Configuration validation successful");
}
