use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use print_quote::pricing::{QuoteInput, RawValue};

#[derive(Parser, Debug)]
#[command(name = "print-quote", version, about = "3D print cost and price quotes")]
pub struct Cli {
    /// Configuration file path (defaults to ./print-quote.toml when present)
    #[arg(short, long, global = true, env = "PRINT_QUOTE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute a quote for one part
    #[command(allow_negative_numbers = true)]
    Quote(QuoteArgs),

    /// List the material catalog
    Materials,

    /// Start the quote HTTP API
    Serve,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Quote fields, taken as raw text and coerced the same way form fields are
#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Part name
    #[arg(short = 'n', long)]
    pub part_name: Option<String>,

    /// Number of units
    #[arg(short, long)]
    pub quantity: Option<String>,

    /// Part volume in cm³
    #[arg(short, long)]
    pub volume: Option<String>,

    /// Measured weight in grams (overrides the volume estimate)
    #[arg(short, long)]
    pub weight: Option<String>,

    /// Material id from the catalog
    #[arg(short, long)]
    pub material: Option<String>,

    /// Material density in g/cm³ (overrides the catalog value)
    #[arg(long)]
    pub density: Option<String>,

    /// Material price per kg (overrides the catalog value)
    #[arg(long)]
    pub price_per_kg: Option<String>,

    /// Waste/support allowance in percent
    #[arg(long)]
    pub waste: Option<String>,

    /// Print time in hours
    #[arg(long)]
    pub hours: Option<String>,

    /// Machine cost per hour
    #[arg(long)]
    pub machine_cost: Option<String>,

    /// Finishing/labor cost per unit
    #[arg(long)]
    pub finishing: Option<String>,

    /// Margin in percent
    #[arg(long)]
    pub margin: Option<String>,

    /// Tax in percent
    #[arg(long)]
    pub tax: Option<String>,

    /// Currency code used for formatting
    #[arg(long)]
    pub currency: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the copy-ready summary instead of the table
    #[arg(short, long)]
    pub summary: bool,

    /// Write <part>_cotizacion.txt into DIR (export directory from config when omitted)
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<Option<PathBuf>>,
}

impl QuoteArgs {
    pub fn to_input(&self) -> QuoteInput {
        let raw = |value: &Option<String>| value.clone().map(RawValue::Text);

        QuoteInput {
            part_name: self.part_name.clone(),
            quantity: raw(&self.quantity),
            volume: raw(&self.volume),
            weight: raw(&self.weight),
            material: self.material.clone(),
            density: raw(&self.density),
            price_per_kg: raw(&self.price_per_kg),
            waste_percent: raw(&self.waste),
            print_hours: raw(&self.hours),
            machine_cost_per_hour: raw(&self.machine_cost),
            finishing_cost: raw(&self.finishing),
            margin_percent: raw(&self.margin),
            tax_percent: raw(&self.tax),
            currency: self.currency.clone(),
        }
    }
}
