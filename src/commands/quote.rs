use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use print_quote::{
    config::Config,
    presenter::{DisplayRow, Presenter},
    pricing::CostBreakdown,
    quote::QuoteContext,
};

use crate::cli::{OutputFormat, QuoteArgs};

#[derive(Debug, Serialize)]
struct QuoteOutput<'a> {
    breakdown: &'a CostBreakdown,
    rows: Vec<DisplayRow>,
    summary: String,
}

/// Execute the quote command
///
/// Resolves the raw flags against the catalog and shop defaults, prints the
/// breakdown and writes the export file when requested.
pub fn execute(args: &QuoteArgs, cfg: &Config) -> Result<()> {
    let context = QuoteContext::from_config(cfg);
    let breakdown = context.quote(&args.to_input())?;
    let presenter = Presenter::default();

    match args.format {
        OutputFormat::Json => {
            let output = QuoteOutput {
                breakdown: &breakdown,
                rows: presenter.display_rows(&breakdown),
                summary: presenter.summary(&breakdown),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text if args.summary => println!("{}", presenter.summary(&breakdown)),
        OutputFormat::Text => print_rows(&presenter.display_rows(&breakdown)),
    }

    if let Some(dir) = &args.export {
        let dir = dir.as_ref().unwrap_or(&cfg.export.directory);
        let path = presenter.export(&breakdown, dir)?;
        eprintln!("{} {}", "✓ Exported to".green(), path.display());
    }

    info!(
        part = %breakdown.part_name,
        total_price = breakdown.total_price,
        "Quote command completed"
    );
    Ok(())
}

fn print_rows(rows: &[DisplayRow]) {
    let width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    for row in rows {
        let padding = " ".repeat(width - row.label.chars().count());
        let label = format!("{}:{}", row.label, padding);
        if row.label == "Total" {
            println!("  {} {}", label.cyan().bold(), row.value.bold());
        } else {
            println!("  {} {}", label.cyan(), row.value);
        }
    }
}
