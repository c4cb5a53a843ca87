//! Currency formatting shared by every quote output
//!
//! Amounts are rendered in Colombian Spanish style: `.` groups thousands,
//! `,` separates decimals and the symbol leads (`$ 53.640,00`). Only the
//! peso and the US dollar have a local symbol; other currencies lead with
//! their ISO code (`EUR 10,50`).

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currencies whose amounts carry no minor unit
const ZERO_DECIMAL_CURRENCIES: &[&str] = &["CLP", "JPY", "KRW", "PYG", "VND"];

/// Formats monetary amounts for a currency code
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFormatter;

impl CurrencyFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format `amount` for `currency_code`
    ///
    /// Codes that are not three ASCII letters fall back to a plain
    /// two-decimal number. Non-finite amounts render as `-`.
    pub fn format(&self, amount: f64, currency_code: &str) -> String {
        if !amount.is_finite() {
            return "-".to_string();
        }

        let code = currency_code.trim().to_ascii_uppercase();
        if !is_well_formed(&code) {
            return format!("{:.2}", amount);
        }

        let digits = fraction_digits(&code);
        let number = group_number(amount.abs(), digits);
        let sign = if amount < 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };

        format!("{}{} {}", sign, symbol(&code), number)
    }
}

/// Whether `code` looks like an ISO 4217 code (three ASCII letters)
pub fn is_well_formed(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

fn symbol(code: &str) -> &str {
    match code {
        "COP" => "$",
        "USD" => "US$",
        other => other,
    }
}

fn fraction_digits(code: &str) -> usize {
    if ZERO_DECIMAL_CURRENCIES.contains(&code) {
        0
    } else {
        2
    }
}

/// Render a non-negative amount with `.` thousands and `,` decimals
///
/// Rounding happens on the shortest decimal form of the amount, so `1.005`
/// rounds to `1.01` even though its binary value sits just below.
fn group_number(amount: f64, digits: usize) -> String {
    let fixed = match Decimal::from_str(&amount.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(amount))
    {
        Some(value) => {
            let rounded = value
                .round_dp_with_strategy(digits as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", digits, rounded)
        }
        // beyond the decimal range
        None => format!("{:.*}", digits, amount),
    };

    let (integer_digits, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_digits.len() + integer_digits.len() / 3);
    for (i, c) in integer_digits.chars().enumerate() {
        if i > 0 && (integer_digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) if digits > 0 => format!("{},{}", grouped, fraction),
        _ => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(amount: f64, code: &str) -> String {
        CurrencyFormatter::new().format(amount, code)
    }

    #[test]
    fn test_cop_formatting() {
        assert_eq!(fmt(53_640.0, "COP"), "$ 53.640,00");
        assert_eq!(fmt(107_280.0, "cop"), "$ 107.280,00");
        assert_eq!(fmt(1_234_567.891, "COP"), "$ 1.234.567,89");
        assert_eq!(fmt(0.0, "COP"), "$ 0,00");
        assert_eq!(fmt(999.0, "COP"), "$ 999,00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(fmt(0.125, "COP"), "$ 0,13");
        assert_eq!(fmt(11_000.000_000_000_002, "COP"), "$ 11.000,00");
        assert_eq!(fmt(9.999, "USD"), "US$ 10,00");
        assert_eq!(fmt(1.005, "USD"), "US$ 1,01");
        assert_eq!(fmt(2.675, "USD"), "US$ 2,68");
        assert_eq!(fmt(2.5, "CLP"), "CLP 3");
    }

    #[test]
    fn test_symbols_and_codes() {
        assert_eq!(fmt(10.5, "USD"), "US$ 10,50");
        assert_eq!(fmt(10.5, "EUR"), "EUR 10,50");
        assert_eq!(fmt(10.5, "MXN"), "MXN 10,50");
        assert_eq!(fmt(10.5, "pen"), "PEN 10,50");
    }

    #[test]
    fn test_zero_decimal_currency() {
        assert_eq!(fmt(53_640.4, "CLP"), "CLP 53.640");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(fmt(-1_500.0, "COP"), "-$ 1.500,00");
        assert_eq!(fmt(-0.001, "COP"), "$ 0,00");
    }

    #[test]
    fn test_unsupported_code_falls_back() {
        assert_eq!(fmt(53_640.0, "PESOS"), "53640.00");
        assert_eq!(fmt(1.005, ""), "1.00");
        assert_eq!(fmt(2.5, "C0P"), "2.50");
    }

    #[test]
    fn test_non_finite_amount() {
        assert_eq!(fmt(f64::NAN, "COP"), "-");
        assert_eq!(fmt(f64::INFINITY, "COP"), "-");
    }
}
