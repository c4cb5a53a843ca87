//! Quote assembly shared by the CLI and the HTTP API

use tracing::debug;

use crate::config::Config;
use crate::error::AppError;
use crate::materials::MaterialCatalog;
use crate::pricing::{compute, CostBreakdown, PricingParams, QuoteDefaults, QuoteInput};

/// Material catalog and shop defaults used to resolve raw input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteContext {
    pub materials: MaterialCatalog,
    pub defaults: QuoteDefaults,
}

impl QuoteContext {
    pub fn new(materials: MaterialCatalog, defaults: QuoteDefaults) -> Self {
        Self {
            materials,
            defaults,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.materials.clone(), cfg.defaults.clone())
    }

    /// Resolve raw input into pricing parameters
    ///
    /// Fails only when the input names a material missing from the catalog.
    pub fn params(&self, input: &QuoteInput) -> Result<PricingParams, AppError> {
        let material = match input.material_id(&self.defaults) {
            Some(id) => Some(self.materials.require(id)?),
            None => None,
        };
        Ok(input.resolve(material, &self.defaults))
    }

    /// Resolve raw input and compute its breakdown
    pub fn quote(&self, input: &QuoteInput) -> Result<CostBreakdown, AppError> {
        let params = self.params(input)?;
        let breakdown = compute(&params);

        debug!(
            part = %breakdown.part_name,
            quantity = breakdown.quantity,
            weight_g = breakdown.estimated_weight_grams,
            unit_price = breakdown.unit_price,
            total_price = breakdown.total_price,
            currency = %breakdown.currency_code,
            "Quote computed"
        );

        Ok(breakdown)
    }

    /// Material label for metrics: the catalog id, or "custom" when none applies
    pub fn material_label<'a>(&'a self, input: &'a QuoteInput) -> &'a str {
        input
            .material_id(&self.defaults)
            .and_then(|id| self.materials.get(id))
            .map(|m| m.id.as_str())
            .unwrap_or("custom")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_with_catalog_material() {
        let ctx = QuoteContext::default();
        let input = QuoteInput {
            volume: Some("100".into()),
            material: Some("PLA".to_string()),
            ..QuoteInput::default()
        };

        let breakdown = ctx.quote(&input).unwrap();
        assert_eq!(breakdown.estimated_weight_grams, 124.0);
        assert!((breakdown.material_cost - 9_920.0).abs() < 1e-6);
        assert_eq!(ctx.material_label(&input), "pla");
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let ctx = QuoteContext::default();
        let input = QuoteInput {
            material: Some("nylon".to_string()),
            ..QuoteInput::default()
        };

        assert!(matches!(
            ctx.quote(&input),
            Err(AppError::UnknownMaterial { .. })
        ));
    }

    #[test]
    fn test_no_material_uses_field_defaults() {
        let ctx = QuoteContext::default();
        let params = ctx.params(&QuoteInput::default()).unwrap();

        assert_eq!(params.material_density, 1.0);
        assert_eq!(params.price_per_kg, 0.0);
        assert_eq!(ctx.material_label(&QuoteInput::default()), "custom");
    }
}
