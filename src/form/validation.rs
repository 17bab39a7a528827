use std::fmt;

use crate::design::DesignInputs;
use crate::form::fields::{Field, FIELDS};
use crate::form::values::FieldValues;
use crate::quantity::detector::{looks_like_quantity, syntax_hint};
use crate::quantity::{validate, ValidationError};

/// Issues collected over a whole form
#[derive(Debug, Clone, Default)]
pub struct FormValidation {
    pub issues: Vec<FieldIssue>,
}

#[derive(Debug, Clone)]
pub struct FieldIssue {
    pub field: Field,
    pub input: String,
    pub error: ValidationError,
}

impl FieldIssue {
    /// Syntax help for inputs that are not even shaped like a quantity
    pub fn hint(&self) -> Option<&'static str> {
        match self.error {
            ValidationError::Unparseable { .. } if !looks_like_quantity(&self.input) => {
                Some(syntax_hint())
            }
            _ => None,
        }
    }
}

impl FormValidation {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, field: Field, input: &str, error: ValidationError) {
        self.issues.push(FieldIssue {
            field,
            input: input.to_string(),
            error,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fields that should be flagged in the form
    pub fn failed_fields(&self) -> Vec<Field> {
        self.issues.iter().map(|i| i.field).collect()
    }
}

impl fmt::Display for FormValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invalid fields:")?;
        for issue in &self.issues {
            let spec = issue.field.spec();
            writeln!(f, "  [{}] {}: {}", spec.key, spec.label, issue.error)?;
            if let Some(hint) = issue.hint() {
                writeln!(f, "      {}", hint)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FormValidation {}

/// Validate every field and build the calculator inputs.
///
/// All fields are checked even after a failure so every bad field is reported
/// at once. Inputs are only returned when no field failed.
pub fn validate_form(values: &FieldValues) -> Result<DesignInputs, FormValidation> {
    let mut validation = FormValidation::new();
    let mut parsed = [0.0_f64; 13];

    for (slot, spec) in parsed.iter_mut().zip(FIELDS.iter()) {
        let text = values.get(spec.field);
        match validate(text, spec.unit, spec.power) {
            Ok(value) => *slot = value,
            Err(e) => {
                tracing::debug!(field = spec.key, input = text, error = %e, "field rejected");
                validation.add_issue(spec.field, text, e);
            }
        }
    }

    if !validation.is_valid() {
        return Err(validation);
    }

    let value = |field: Field| parsed[field as usize];
    Ok(DesignInputs {
        outer_diameter: value(Field::Od),
        inner_diameter: value(Field::Id),
        height: value(Field::Ht),
        effective_area: value(Field::Ae),
        effective_length: value(Field::Le),
        wire_diameter: value(Field::WireD),
        wire_resistivity: value(Field::WireRo),
        v_in: value(Field::Vin),
        v_out: value(Field::Vout),
        i_out: value(Field::Iout),
        frequency: value(Field::Freq),
        turns: value(Field::Turns),
        inductance: value(Field::L),
    })
}
