use serde::Serialize;

use crate::quantity::error::ParseError;
use crate::quantity::units::{Prefix, UnitSymbol};

/// Result of parsing an engineering-notation string
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedQuantity {
    /// Numeric value in the base SI unit, prefix raised to the requested power
    pub value: f64,
    /// Unit matched at the end of the input (`Dimensionless` if none)
    pub unit: UnitSymbol,
}

/// Drop all whitespace and treat ',' as the decimal separator
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parse a string like "12.5kHz" or "4,7 uH" into its base-unit value.
///
/// `power` only scales the prefix factor, so an area field (power 2) entered
/// as "150mm" yields 150 * (1e-3)^2 square meters. The prefix is looked up
/// only after a unit was stripped; a bare number is dimensionless and keeps
/// any trailing letters, which then fail the float conversion.
pub fn parse(text: &str, power: i32) -> Result<ParsedQuantity, ParseError> {
    let normalized = normalize(text);

    // Unit first, prefix second: a lone trailing "m" is the meter, "mm" is milli-meter
    let matched = UnitSymbol::MATCH_ORDER
        .iter()
        .find_map(|u| u.strip_from(&normalized).map(|rest| (rest, *u)));

    let (mantissa_text, prefix, unit) = match matched {
        Some((rest, unit)) => {
            let (mantissa_text, prefix) = Prefix::split_from(rest);
            (mantissa_text, prefix, unit)
        }
        None => (normalized.as_str(), Prefix::None, UnitSymbol::Dimensionless),
    };

    let mantissa = mantissa_text
        .parse::<f64>()
        .map_err(|_| ParseError::NotANumber(mantissa_text.to_string()))?;

    let value = mantissa * prefix.factor().powi(power);
    tracing::debug!(
        input = text,
        mantissa,
        prefix = prefix.token(),
        unit = unit.symbol(),
        power,
        value,
        "parsed quantity"
    );

    Ok(ParsedQuantity { value, unit })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
    }

    #[test]
    fn test_parse_frequency_with_prefix() {
        let q = parse("12.5kHz", 1).unwrap();
        assert_eq!(q.value, 12500.0);
        assert_eq!(q.unit, UnitSymbol::Frequency);
    }

    #[test]
    fn test_parse_trailing_m_is_meter() {
        let q = parse("10m", 1).unwrap();
        assert_eq!(q.value, 10.0);
        assert_eq!(q.unit, UnitSymbol::Length);
    }

    #[test]
    fn test_parse_mm_is_milli_meter() {
        let q = parse("10mm", 1).unwrap();
        assert!(approx_eq(q.value, 0.01));
        assert_eq!(q.unit, UnitSymbol::Length);
    }

    #[test]
    fn test_parse_area_power_scales_prefix_only() {
        let q = parse("150mm", 2).unwrap();
        assert!(approx_eq(q.value, 150.0e-6), "got {}", q.value);
        assert_eq!(q.unit, UnitSymbol::Length);

        // Without a prefix the power has nothing to scale
        let q = parse("150m", 2).unwrap();
        assert_eq!(q.value, 150.0);
    }

    #[test]
    fn test_parse_dimensionless() {
        let q = parse("42.5", 1).unwrap();
        assert_eq!(q.value, 42.5);
        assert_eq!(q.unit, UnitSymbol::Dimensionless);

        let q = parse("42.5", 2).unwrap();
        assert_eq!(q.value, 42.5);
        assert_eq!(q.unit, UnitSymbol::Dimensionless);
    }

    #[test]
    fn test_parse_prefix_without_unit_is_not_a_number() {
        // No unit stripped, so "k" is never looked up as a prefix
        assert_eq!(
            parse("5k", 1),
            Err(ParseError::NotANumber("5k".to_string()))
        );
    }

    #[test]
    fn test_parse_comma_and_whitespace() {
        let q = parse(" 4,7 uH ", 1).unwrap();
        assert!(approx_eq(q.value, 4.7e-6));
        assert_eq!(q.unit, UnitSymbol::Inductance);

        let q = parse("1\t000 V", 1).unwrap();
        assert_eq!(q.value, 1000.0);
    }

    #[test]
    fn test_parse_scientific_notation() {
        let q = parse("1.5e-3H", 1).unwrap();
        assert_eq!(q.value, 1.5e-3);
        assert_eq!(q.unit, UnitSymbol::Inductance);

        let q = parse("3e5Hz", 1).unwrap();
        assert_eq!(q.value, 300000.0);
    }

    #[test]
    fn test_parse_mega_and_giga() {
        assert_eq!(parse("2MHz", 1).unwrap().value, 2.0e6);
        assert_eq!(parse("1GHz", 1).unwrap().value, 1.0e9);
    }

    #[test]
    fn test_parse_unit_only_fails() {
        assert!(matches!(parse("m", 1), Err(ParseError::NotANumber(_))));
        assert!(matches!(parse("mm", 1), Err(ParseError::NotANumber(_))));
        assert!(matches!(parse("", 1), Err(ParseError::NotANumber(_))));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(
            parse("abc", 1),
            Err(ParseError::NotANumber("abc".to_string()))
        );
        // "12xV": unit V stripped, no prefix, "12x" is not a number
        assert_eq!(
            parse("12xV", 1),
            Err(ParseError::NotANumber("12x".to_string()))
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" 1,5 k Hz\n"), "1.5kHz");
    }
}
