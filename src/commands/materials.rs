use colored::Colorize;

use print_quote::{config::Config, currency::CurrencyFormatter, pricing::DEFAULT_CURRENCY};

/// Execute the materials command
///
/// Prices are shown in the configured default currency
pub fn execute(cfg: &Config) {
    let formatter = CurrencyFormatter::new();
    let currency = cfg.defaults.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
    let default_material = cfg.defaults.material.as_deref();

    println!("{}", "Materials:".green().bold());
    for material in cfg.materials.iter() {
        let marker = if default_material.is_some_and(|id| id.eq_ignore_ascii_case(&material.id)) {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {:<10} {:>5} g/cm³  {}/kg{}",
            format!("{:<8}", material.id).cyan(),
            material.name,
            material.density,
            formatter.format(material.price_per_kg, currency),
            marker
        );
    }
}
