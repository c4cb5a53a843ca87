use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::materials::MaterialCatalog;
use crate::pricing::QuoteDefaults;

/// Config file looked up when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "print-quote.toml";

/// Prefix for environment overrides, e.g. `PRINT_QUOTE__SERVER__PORT`
pub const ENV_PREFIX: &str = "PRINT_QUOTE";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
    pub export: ExportConfig,
    pub defaults: QuoteDefaults,
    pub materials: MaterialCatalog,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// "plain" or "json"
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: "plain".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory used by `quote --export` when no directory is given
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// Load configuration from a TOML file plus environment overrides
///
/// An explicit `path` must exist; without one, `print-quote.toml` in the
/// working directory is used when present and built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let settings = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = settings.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Parse configuration from a TOML string (no environment overrides)
pub fn parse_config(toml_text: &str) -> Result<Config, AppError> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml_text, config::FileFormat::Toml))
        .build()?;

    let cfg: Config = settings.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<(), AppError> {
    if !matches!(cfg.server.log_format.as_str(), "plain" | "json") {
        return Err(AppError::Config(format!(
            "Invalid log format '{}', expected 'plain' or 'json'",
            cfg.server.log_format
        )));
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        return Err(AppError::Config(format!(
            "Metrics endpoint must start with '/', got '{}'",
            cfg.metrics.endpoint
        )));
    }

    if cfg.materials.is_empty() {
        return Err(AppError::Config(
            "At least one material must be configured".to_string(),
        ));
    }
    cfg.materials.validate()?;

    if let Some(material) = &cfg.defaults.material {
        if cfg.materials.get(material).is_none() {
            return Err(AppError::Config(format!(
                "Default material '{}' is not in the catalog",
                material
            )));
        }
    }

    let d = &cfg.defaults;
    for (name, value) in [
        ("waste_percent", d.waste_percent),
        ("machine_cost_per_hour", d.machine_cost_per_hour),
        ("finishing_cost", d.finishing_cost),
        ("margin_percent", d.margin_percent),
        ("tax_percent", d.tax_percent),
    ] {
        if let Some(v) = value {
            if !(v.is_finite() && v >= 0.0) {
                return Err(AppError::Config(format!(
                    "Default {} must be a non-negative number, got {}",
                    name, v
                )));
            }
        }
    }

    if d.quantity == Some(0) {
        return Err(AppError::Config("Default quantity must be at least 1".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[server]
host = "0.0.0.0"
port = 9090
log_format = "json"

[defaults]
currency = "COP"
material = "petg"
machine_cost_per_hour = 5000
finishing_cost = 10000
margin_percent = 30
tax_percent = 19

[[materials]]
id = "pla"
name = "PLA"
density = 1.24
price_per_kg = 80000

[[materials]]
id = "petg"
name = "PETG"
density = 1.27
price_per_kg = 90000
"#;

    #[test]
    fn test_parse_sample_config() {
        let cfg = parse_config(SAMPLE).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.log_level, "info");
        assert_eq!(cfg.defaults.material.as_deref(), Some("petg"));
        assert_eq!(cfg.defaults.tax_percent, Some(19.0));
        assert_eq!(cfg.materials.len(), 2);
        assert!(cfg.metrics.enabled);
    }

    #[test]
    fn test_empty_config_uses_builtin_catalog() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.materials, MaterialCatalog::default());
    }

    #[test]
    fn test_validate_rejects_unknown_default_material() {
        let mut cfg = Config::default();
        cfg.defaults.material = Some("nylon".to_string());

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("nylon"));
    }

    #[test]
    fn test_validate_rejects_negative_default() {
        let mut cfg = Config::default();
        cfg.defaults.margin_percent = Some(-5.0);
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_log_format() {
        let mut cfg = Config::default();
        cfg.server.log_format = "xml".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/print-quote.toml")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
