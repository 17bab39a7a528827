use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::quantity::UnitSymbol;

/// One of the thirteen input fields of a design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Od,
    Id,
    Ht,
    Ae,
    Le,
    WireD,
    WireRo,
    Vin,
    Vout,
    Iout,
    Freq,
    Turns,
    L,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Toroid,
    Wire,
    Converter,
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldGroup::Toroid => write!(f, "Toroid"),
            FieldGroup::Wire => write!(f, "Wire"),
            FieldGroup::Converter => write!(f, "Inductor / converter"),
        }
    }
}

/// Static description of a field: what unit it must carry and at what power
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub key: &'static str,
    pub label: &'static str,
    pub group: FieldGroup,
    pub unit: UnitSymbol,
    pub power: i32,
}

const fn spec(
    field: Field,
    key: &'static str,
    label: &'static str,
    group: FieldGroup,
    unit: UnitSymbol,
    power: i32,
) -> FieldSpec {
    FieldSpec {
        field,
        key,
        label,
        group,
        unit,
        power,
    }
}

/// All fields, in form order
pub static FIELDS: [FieldSpec; 13] = [
    spec(Field::Od, "od", "Outer diameter", FieldGroup::Toroid, UnitSymbol::Length, 1),
    spec(Field::Id, "id", "Inner diameter", FieldGroup::Toroid, UnitSymbol::Length, 1),
    spec(Field::Ht, "ht", "Height", FieldGroup::Toroid, UnitSymbol::Length, 1),
    spec(Field::Ae, "ae", "Effective area", FieldGroup::Toroid, UnitSymbol::Length, 2),
    spec(Field::Le, "le", "Effective length", FieldGroup::Toroid, UnitSymbol::Length, 1),
    spec(Field::WireD, "wire_d", "Wire diameter", FieldGroup::Wire, UnitSymbol::Length, 1),
    spec(Field::WireRo, "wire_ro", "Wire resistivity (ohm*m)", FieldGroup::Wire, UnitSymbol::Dimensionless, 1),
    spec(Field::Vin, "vin", "Input voltage", FieldGroup::Converter, UnitSymbol::Voltage, 1),
    spec(Field::Vout, "vout", "Output voltage", FieldGroup::Converter, UnitSymbol::Voltage, 1),
    spec(Field::Iout, "iout", "Output current", FieldGroup::Converter, UnitSymbol::Current, 1),
    spec(Field::Freq, "freq", "Frequency", FieldGroup::Converter, UnitSymbol::Frequency, 1),
    spec(Field::Turns, "turns", "Turns", FieldGroup::Converter, UnitSymbol::Dimensionless, 1),
    spec(Field::L, "l", "Inductance (expected)", FieldGroup::Converter, UnitSymbol::Inductance, 1),
];

impl Field {
    pub fn spec(&self) -> &'static FieldSpec {
        // FIELDS is declared in enum order
        &FIELDS[*self as usize]
    }

    pub fn key(&self) -> &'static str {
        self.spec().key
    }

    pub fn all() -> impl Iterator<Item = Field> {
        FIELDS.iter().map(|s| s.field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown field '{0}'")]
pub struct FieldError(pub String);

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        FIELDS
            .iter()
            .find(|spec| spec.key == key)
            .map(|spec| spec.field)
            .ok_or_else(|| FieldError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for (i, spec) in FIELDS.iter().enumerate() {
            assert_eq!(spec.field as usize, i, "field {} out of order", spec.key);
            assert_eq!(spec.field.spec().key, spec.key);
        }
    }

    #[test]
    fn test_only_area_is_squared() {
        let squared: Vec<_> = FIELDS.iter().filter(|s| s.power == 2).map(|s| s.field).collect();
        assert_eq!(squared, vec![Field::Ae]);
    }

    #[test]
    fn test_expected_units() {
        assert_eq!(Field::Freq.spec().unit, UnitSymbol::Frequency);
        assert_eq!(Field::L.spec().unit, UnitSymbol::Inductance);
        assert_eq!(Field::Iout.spec().unit, UnitSymbol::Current);
        assert_eq!(Field::Turns.spec().unit, UnitSymbol::Dimensionless);
        assert_eq!(Field::WireRo.spec().unit, UnitSymbol::Dimensionless);
    }

    #[test]
    fn test_field_from_key() {
        assert_eq!("wire_d".parse::<Field>().unwrap(), Field::WireD);
        assert_eq!("VIN".parse::<Field>().unwrap(), Field::Vin);
        assert!("foo".parse::<Field>().is_err());
    }
}
