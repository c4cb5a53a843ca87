//! Cost computation for a printed part

use serde::{Deserialize, Serialize};

use super::params::PricingParams;

/// Cost breakdown for one quote
///
/// Monetary fields are left unrounded; rounding to the currency's minor
/// unit happens when the breakdown is formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub part_name: String,
    pub quantity: u32,
    /// Weight including waste allowance, rounded to 1 decimal
    pub estimated_weight_grams: f64,
    pub material_cost: f64,
    pub machine_cost: f64,
    pub finishing_cost: f64,
    pub subtotal: f64,
    pub tax_value: f64,
    pub margin_value: f64,
    pub unit_price: f64,
    pub total_price: f64,
    pub currency_code: String,
    pub print_hours: f64,
    pub tax_percent: f64,
    pub margin_percent: f64,
}

/// Compute the cost breakdown for a parameter set
///
/// Out-of-range fields are coerced to their defaults first, so every input
/// produces a complete breakdown.
pub fn compute(params: &PricingParams) -> CostBreakdown {
    let p = params.normalized();

    let base_weight = if p.weight_grams_override > 0.0 {
        p.weight_grams_override
    } else {
        p.volume_cm3 * p.material_density
    };
    let weight = base_weight * (1.0 + p.waste_percent / 100.0);

    // price is per kg
    let material_cost = (weight / 1000.0) * p.price_per_kg;
    let machine_cost = p.print_hours * p.machine_cost_per_hour;
    let subtotal = material_cost + machine_cost + p.finishing_cost;

    let tax_value = subtotal * (p.tax_percent / 100.0);
    let margin_value = subtotal * (p.margin_percent / 100.0);

    let unit_price = subtotal + margin_value + tax_value;
    let total_price = unit_price * f64::from(p.quantity);

    CostBreakdown {
        part_name: p.part_name,
        quantity: p.quantity,
        estimated_weight_grams: round_to_tenth(weight),
        material_cost,
        machine_cost,
        finishing_cost: p.finishing_cost,
        subtotal,
        tax_value,
        margin_value,
        unit_price,
        total_price,
        currency_code: p.currency_code,
        print_hours: p.print_hours,
        tax_percent: p.tax_percent,
        margin_percent: p.margin_percent,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
