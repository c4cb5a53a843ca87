use serde::{Deserialize, Serialize};

/// Part name used when the caller leaves it blank
pub const DEFAULT_PART_NAME: &str = "Pieza";

/// Currency used when none is supplied
pub const DEFAULT_CURRENCY: &str = "COP";

/// Parameters for a single pricing calculation
///
/// Monetary values are in the major unit of `currency_code`; no currency
/// conversion is ever applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingParams {
    pub part_name: String,
    pub quantity: u32,
    pub volume_cm3: f64,
    /// Measured weight in grams; takes precedence over the volume estimate when > 0
    pub weight_grams_override: f64,
    /// g/cm³
    pub material_density: f64,
    pub price_per_kg: f64,
    pub waste_percent: f64,
    pub print_hours: f64,
    pub machine_cost_per_hour: f64,
    pub finishing_cost: f64,
    pub margin_percent: f64,
    pub tax_percent: f64,
    pub currency_code: String,
}

impl Default for PricingParams {
    fn default() -> Self {
        Self {
            part_name: DEFAULT_PART_NAME.to_string(),
            quantity: 1,
            volume_cm3: 0.0,
            weight_grams_override: 0.0,
            material_density: 1.0,
            price_per_kg: 0.0,
            waste_percent: 0.0,
            print_hours: 0.0,
            machine_cost_per_hour: 0.0,
            finishing_cost: 0.0,
            margin_percent: 0.0,
            tax_percent: 0.0,
            currency_code: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PricingParams {
    /// Return a copy where every field satisfies its range
    ///
    /// Out-of-range or non-finite values fall back to the field default.
    /// Applying this twice gives the same result as applying it once.
    pub fn normalized(&self) -> Self {
        Self {
            part_name: part_name_or_default(&self.part_name),
            quantity: self.quantity.max(1),
            volume_cm3: non_negative_or(self.volume_cm3, 0.0),
            weight_grams_override: non_negative_or(self.weight_grams_override, 0.0),
            material_density: positive_or(self.material_density, 1.0),
            price_per_kg: non_negative_or(self.price_per_kg, 0.0),
            waste_percent: non_negative_or(self.waste_percent, 0.0),
            print_hours: non_negative_or(self.print_hours, 0.0),
            machine_cost_per_hour: non_negative_or(self.machine_cost_per_hour, 0.0),
            finishing_cost: non_negative_or(self.finishing_cost, 0.0),
            margin_percent: non_negative_or(self.margin_percent, 0.0),
            tax_percent: non_negative_or(self.tax_percent, 0.0),
            currency_code: currency_or_default(&self.currency_code),
        }
    }
}

/// Keep `value` when it is finite and >= 0, otherwise use `default`
pub fn non_negative_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        default
    }
}

/// Keep `value` when it is finite and > 0, otherwise use `default`
pub fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

/// Coerce a numeric quantity: fractions truncate, anything below 1 becomes 1
pub fn quantity_or_default(value: f64) -> u32 {
    if !value.is_finite() || value < 1.0 {
        return 1;
    }
    if value >= u32::MAX as f64 {
        return u32::MAX;
    }
    value.trunc() as u32
}

pub fn part_name_or_default(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_PART_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn currency_or_default(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        DEFAULT_CURRENCY.to_string()
    } else {
        trimmed.to_ascii_uppercase()
    }
}
