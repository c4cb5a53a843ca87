//! Quote presentation
//!
//! Every output channel (terminal rows, clipboard summary, `.txt` export,
//! HTTP responses) goes through the same `Presenter` so amounts are
//! formatted one way only.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::currency::CurrencyFormatter;
use crate::error::AppError;
use crate::pricing::CostBreakdown;

/// Suffix appended to every export file name
pub const EXPORT_SUFFIX: &str = "_cotizacion.txt";

/// One labelled output field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct Presenter {
    formatter: CurrencyFormatter,
}

impl Presenter {
    fn money(&self, amount: f64, breakdown: &CostBreakdown) -> String {
        self.formatter.format(amount, &breakdown.currency_code)
    }

    /// Fields shown on screen, in display order
    pub fn display_rows(&self, b: &CostBreakdown) -> Vec<DisplayRow> {
        let row = |label, value| DisplayRow { label, value };
        vec![
            row("Pieza", format!("{} × {}", b.part_name, b.quantity)),
            row("Peso estimado", format!("{} g", b.estimated_weight_grams)),
            row("Costo material", self.money(b.material_cost, b)),
            row(
                "Costo máquina",
                format!("{} ({} h)", self.money(b.machine_cost, b), b.print_hours),
            ),
            row("Mano de obra", self.money(b.finishing_cost, b)),
            row("Subtotal", self.money(b.subtotal, b)),
            row(
                "IVA",
                format!("{} ({}%)", self.money(b.tax_value, b), b.tax_percent),
            ),
            row(
                "Margen",
                format!("{} ({}%)", self.money(b.margin_value, b), b.margin_percent),
            ),
            row("Precio unitario", self.money(b.unit_price, b)),
            row("Total", self.money(b.total_price, b)),
        ]
    }

    /// Multi-line summary used for the clipboard and the export file
    pub fn summary(&self, b: &CostBreakdown) -> String {
        [
            format!("Cotización - {}", b.part_name),
            format!("Cantidad: {}", b.quantity),
            format!("Peso estimado: {} g", b.estimated_weight_grams),
            format!("Costo material: {}", self.money(b.material_cost, b)),
            format!("Costo máquina: {}", self.money(b.machine_cost, b)),
            format!("Mano de obra: {}", self.money(b.finishing_cost, b)),
            format!("Subtotal: {}", self.money(b.subtotal, b)),
            format!("IVA: {} ({}%)", self.money(b.tax_value, b), b.tax_percent),
            format!(
                "Margen: {} ({}%)",
                self.money(b.margin_value, b),
                b.margin_percent
            ),
            format!("Precio unitario: {}", self.money(b.unit_price, b)),
            format!("Total: {}", self.money(b.total_price, b)),
        ]
        .join("\n")
    }

    /// Write the summary to `<dir>/<part>_cotizacion.txt` and return the path
    pub fn export(&self, b: &CostBreakdown, dir: &Path) -> Result<PathBuf, AppError> {
        let path = dir.join(export_file_name(&b.part_name));
        std::fs::write(&path, self.summary(b)).map_err(|source| AppError::Export {
            path: path.display().to_string(),
            source,
        })?;

        info!(path = %path.display(), part = %b.part_name, "Quote exported");
        Ok(path)
    }
}

/// File name for an exported quote
///
/// Whitespace runs become a single `_`; characters that are unsafe in file
/// names become `_` as well.
pub fn export_file_name(part_name: &str) -> String {
    let mut name = String::with_capacity(part_name.len() + EXPORT_SUFFIX.len());
    let mut in_whitespace = false;

    for c in part_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
            name.push('_');
        } else {
            name.push(c);
        }
    }

    name.push_str(EXPORT_SUFFIX);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{compute, PricingParams};

    fn sample_breakdown() -> CostBreakdown {
        compute(&PricingParams {
            part_name: "Soporte cámara".to_string(),
            quantity: 2,
            volume_cm3: 100.0,
            material_density: 1.25,
            price_per_kg: 80_000.0,
            waste_percent: 10.0,
            print_hours: 3.0,
            machine_cost_per_hour: 5_000.0,
            finishing_cost: 10_000.0,
            margin_percent: 30.0,
            tax_percent: 19.0,
            ..PricingParams::default()
        })
    }

    #[test]
    fn test_summary_layout() {
        let summary = Presenter::default().summary(&sample_breakdown());
        let expected = "Cotización - Soporte cámara\n\
                        Cantidad: 2\n\
                        Peso estimado: 137.5 g\n\
                        Costo material: $ 11.000,00\n\
                        Costo máquina: $ 15.000,00\n\
                        Mano de obra: $ 10.000,00\n\
                        Subtotal: $ 36.000,00\n\
                        IVA: $ 6.840,00 (19%)\n\
                        Margen: $ 10.800,00 (30%)\n\
                        Precio unitario: $ 53.640,00\n\
                        Total: $ 107.280,00";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_display_rows() {
        let rows = Presenter::default().display_rows(&sample_breakdown());
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].value, "Soporte cámara × 2");
        assert_eq!(rows[1].value, "137.5 g");
        assert_eq!(rows[3].value, "$ 15.000,00 (3 h)");
        assert_eq!(rows[6].value, "$ 6.840,00 (19%)");
        assert_eq!(rows[9].label, "Total");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Soporte cámara"), "Soporte_cámara_cotizacion.txt");
        assert_eq!(export_file_name("a   b\tc"), "a_b_c_cotizacion.txt");
        assert_eq!(export_file_name("../etc/x"), ".._etc_x_cotizacion.txt");
        assert_eq!(export_file_name("Pieza"), "Pieza_cotizacion.txt");
    }

    #[test]
    fn test_export_writes_summary() {
        let dir = tempfile::tempdir().unwrap();
        let presenter = Presenter::default();
        let breakdown = sample_breakdown();

        let path = presenter.export(&breakdown, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("Soporte_cámara_cotizacion.txt"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, presenter.summary(&breakdown));
    }

    #[test]
    fn test_export_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = Presenter::default()
            .export(&sample_breakdown(), &missing)
            .unwrap_err();
        assert!(matches!(err, AppError::Export { .. }));
    }
}
