//! Raw quote input
//!
//! Values arrive the way a form supplies them: possibly missing, possibly
//! text, possibly garbage. Resolution never fails. A value that is missing
//! or invalid for its field is treated as absent, and absent fields take the
//! shop default, then the field default. Quantity is the exception: any
//! number supplied is clamped to at least 1 rather than replaced.

use serde::{Deserialize, Deserializer, Serialize};

use super::params::{
    currency_or_default, part_name_or_default, quantity_or_default, PricingParams,
    DEFAULT_CURRENCY,
};
use crate::materials::Material;

/// A numeric field as supplied by a form or JSON body
///
/// Anything that is neither a number nor a string lands in `Other` and reads
/// as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawValue {
    /// Interpret the value as a finite number
    ///
    /// Text is trimmed before parsing; blank or unparsable text yields None.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            Self::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Raw values for one quote request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteInput {
    #[serde(deserialize_with = "lenient_text")]
    pub part_name: Option<String>,
    pub quantity: Option<RawValue>,
    /// Part volume in cm³
    pub volume: Option<RawValue>,
    /// Measured weight in grams
    pub weight: Option<RawValue>,
    /// Catalog id of the material
    #[serde(deserialize_with = "lenient_text")]
    pub material: Option<String>,
    pub density: Option<RawValue>,
    pub price_per_kg: Option<RawValue>,
    pub waste_percent: Option<RawValue>,
    pub print_hours: Option<RawValue>,
    pub machine_cost_per_hour: Option<RawValue>,
    pub finishing_cost: Option<RawValue>,
    pub margin_percent: Option<RawValue>,
    pub tax_percent: Option<RawValue>,
    #[serde(deserialize_with = "lenient_text")]
    pub currency: Option<String>,
}

/// Accept strings as-is, numbers as their text, anything else as absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Shop defaults that pre-fill absent fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteDefaults {
    pub currency: Option<String>,
    pub material: Option<String>,
    pub quantity: Option<u32>,
    pub waste_percent: Option<f64>,
    pub machine_cost_per_hour: Option<f64>,
    pub finishing_cost: Option<f64>,
    pub margin_percent: Option<f64>,
    pub tax_percent: Option<f64>,
}

impl QuoteInput {
    /// Material id requested by the input, falling back to the shop default
    pub fn material_id<'a>(&'a self, defaults: &'a QuoteDefaults) -> Option<&'a str> {
        self.material
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| defaults.material.as_deref())
    }

    /// Resolve the raw input into a complete parameter set
    ///
    /// `material` supplies density and price per kg when the input does not
    /// set them explicitly.
    pub fn resolve(&self, material: Option<&Material>, defaults: &QuoteDefaults) -> PricingParams {
        // a supplied number never falls back to the shop default
        let quantity = number(&self.quantity)
            .map(quantity_or_default)
            .or_else(|| defaults.quantity.filter(|q| *q >= 1))
            .unwrap_or(1);

        let material_density = number(&self.density)
            .filter(|d| *d > 0.0)
            .or_else(|| material.map(|m| m.density).filter(|d| *d > 0.0))
            .unwrap_or(1.0);

        let price_per_kg = non_negative(&self.price_per_kg)
            .or_else(|| material.map(|m| m.price_per_kg).filter(|p| *p >= 0.0))
            .unwrap_or(0.0);

        let currency = self
            .currency
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or(defaults.currency.as_deref())
            .unwrap_or(DEFAULT_CURRENCY);

        PricingParams {
            part_name: part_name_or_default(self.part_name.as_deref().unwrap_or_default()),
            quantity,
            volume_cm3: non_negative(&self.volume).unwrap_or(0.0),
            weight_grams_override: non_negative(&self.weight).unwrap_or(0.0),
            material_density,
            price_per_kg,
            waste_percent: with_default(&self.waste_percent, defaults.waste_percent),
            print_hours: non_negative(&self.print_hours).unwrap_or(0.0),
            machine_cost_per_hour: with_default(
                &self.machine_cost_per_hour,
                defaults.machine_cost_per_hour,
            ),
            finishing_cost: with_default(&self.finishing_cost, defaults.finishing_cost),
            margin_percent: with_default(&self.margin_percent, defaults.margin_percent),
            tax_percent: with_default(&self.tax_percent, defaults.tax_percent),
            currency_code: currency_or_default(currency),
        }
    }
}

fn number(raw: &Option<RawValue>) -> Option<f64> {
    raw.as_ref().and_then(RawValue::as_number)
}

fn non_negative(raw: &Option<RawValue>) -> Option<f64> {
    number(raw).filter(|v| *v >= 0.0)
}

fn with_default(raw: &Option<RawValue>, shop_default: Option<f64>) -> f64 {
    non_negative(raw)
        .or_else(|| shop_default.filter(|v| v.is_finite() && *v >= 0.0))
        .unwrap_or(0.0)
}
