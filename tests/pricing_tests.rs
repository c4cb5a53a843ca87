/// Integration tests for the pricing engine and the input layer
use print_quote::{
    pricing::{compute, PricingParams, QuoteDefaults, QuoteInput},
    quote::QuoteContext,
};

const EPS: f64 = 1e-6;

fn params(volume: f64, override_g: f64, waste: f64, margin: f64, tax: f64, qty: u32) -> PricingParams {
    PricingParams {
        part_name: "Caja".to_string(),
        quantity: qty,
        volume_cm3: volume,
        weight_grams_override: override_g,
        material_density: 1.24,
        price_per_kg: 85_000.0,
        waste_percent: waste,
        print_hours: 2.5,
        machine_cost_per_hour: 4_200.0,
        finishing_cost: 3_500.0,
        margin_percent: margin,
        tax_percent: tax,
        ..PricingParams::default()
    }
}

fn samples() -> Vec<PricingParams> {
    vec![
        params(0.0, 0.0, 0.0, 0.0, 0.0, 1),
        params(12.3, 0.0, 5.0, 25.0, 19.0, 3),
        params(450.0, 0.0, 15.0, 40.0, 16.0, 10),
        params(999.0, 37.5, 0.0, 10.0, 0.0, 7),
        params(1.0, 0.0, 100.0, 300.0, 21.0, 250),
    ]
}

#[test]
fn test_subtotal_is_sum_of_costs() {
    for p in samples() {
        let b = compute(&p);
        assert_eq!(b.subtotal, b.material_cost + b.machine_cost + b.finishing_cost);
    }
}

#[test]
fn test_unit_price_applies_margin_and_tax_on_subtotal() {
    for p in samples() {
        let b = compute(&p);
        let expected = b.subtotal * (1.0 + p.margin_percent / 100.0 + p.tax_percent / 100.0);
        assert!(
            (b.unit_price - expected).abs() <= EPS * expected.max(1.0),
            "unit price {} vs {}",
            b.unit_price,
            expected
        );
    }
}

#[test]
fn test_total_is_unit_times_quantity() {
    for p in samples() {
        let b = compute(&p);
        assert_eq!(b.total_price, b.unit_price * f64::from(b.quantity));
    }
}

#[test]
fn test_weight_override_beats_volume() {
    let b = compute(&PricingParams {
        volume_cm3: 999.0,
        weight_grams_override: 50.0,
        material_density: 1.25,
        ..PricingParams::default()
    });
    assert_eq!(b.estimated_weight_grams, 50.0);
}

#[test]
fn test_reference_scenario_through_raw_input() {
    let input: QuoteInput = serde_json::from_str(
        r#"{
            "part_name": "Soporte",
            "quantity": "2",
            "volume": "100",
            "density": "1.25",
            "price_per_kg": "80000",
            "waste_percent": "10",
            "print_hours": "3",
            "machine_cost_per_hour": "5000",
            "finishing_cost": "10000",
            "margin_percent": "30",
            "tax_percent": "19",
            "currency": "COP"
        }"#,
    )
    .unwrap();

    let b = QuoteContext::default().quote(&input).unwrap();

    assert_eq!(b.estimated_weight_grams, 137.5);
    assert!((b.material_cost - 11_000.0).abs() < EPS);
    assert!((b.machine_cost - 15_000.0).abs() < EPS);
    assert!((b.subtotal - 36_000.0).abs() < EPS);
    assert!((b.tax_value - 6_840.0).abs() < EPS);
    assert!((b.margin_value - 10_800.0).abs() < EPS);
    assert!((b.unit_price - 53_640.0).abs() < EPS);
    assert!((b.total_price - 107_280.0).abs() < EPS);
}

#[test]
fn test_all_blank_form_gives_zero_quote() {
    let input: QuoteInput = serde_json::from_str(
        r#"{"part_name": "", "quantity": "", "volume": "", "weight": "", "tax_percent": "x"}"#,
    )
    .unwrap();

    let b = QuoteContext::default().quote(&input).unwrap();
    assert_eq!(b.part_name, "Pieza");
    assert_eq!(b.quantity, 1);
    assert_eq!(b.estimated_weight_grams, 0.0);
    assert_eq!(b.total_price, 0.0);
}

#[test]
fn test_shop_defaults_apply_when_fields_are_absent() {
    let context = QuoteContext::new(
        Default::default(),
        QuoteDefaults {
            material: Some("pla".to_string()),
            machine_cost_per_hour: Some(5_000.0),
            tax_percent: Some(19.0),
            ..QuoteDefaults::default()
        },
    );
    let input = QuoteInput {
        volume: Some("10".into()),
        print_hours: Some("1".into()),
        ..QuoteInput::default()
    };

    let b = context.quote(&input).unwrap();
    assert_eq!(b.estimated_weight_grams, 12.4);
    assert!((b.machine_cost - 5_000.0).abs() < EPS);
    assert_eq!(b.tax_percent, 19.0);
}

#[test]
fn test_concurrent_computation_matches_sequential() {
    let expected: Vec<_> = samples().iter().map(compute).collect();

    let handles: Vec<_> = samples()
        .into_iter()
        .map(|p| std::thread::spawn(move || compute(&p)))
        .collect();
    let actual: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(actual, expected);
}
