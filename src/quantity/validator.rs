use crate::quantity::error::ValidationError;
use crate::quantity::parser::parse;
use crate::quantity::units::UnitSymbol;

/// Parse `text` and require that it carries `expected_unit`.
/// Returns the value in base SI units.
pub fn validate(text: &str, expected_unit: UnitSymbol, power: i32) -> Result<f64, ValidationError> {
    let parsed = parse(text, power).map_err(|source| ValidationError::Unparseable {
        input: text.to_string(),
        source,
    })?;

    if parsed.unit != expected_unit {
        return Err(ValidationError::UnitMismatch {
            expected: expected_unit,
            found: parsed.unit,
        });
    }

    Ok(parsed.value)
}
