use serde::{Deserialize, Serialize};

use crate::form::fields::Field;

/// Raw text of every field, exactly as the user typed it
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldValues {
    pub od: String,
    pub id: String,
    pub ht: String,
    pub ae: String,
    pub le: String,
    pub wire_d: String,
    pub wire_ro: String,
    pub vin: String,
    pub vout: String,
    pub iout: String,
    pub freq: String,
    pub turns: String,
    pub l: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Od => &self.od,
            Field::Id => &self.id,
            Field::Ht => &self.ht,
            Field::Ae => &self.ae,
            Field::Le => &self.le,
            Field::WireD => &self.wire_d,
            Field::WireRo => &self.wire_ro,
            Field::Vin => &self.vin,
            Field::Vout => &self.vout,
            Field::Iout => &self.iout,
            Field::Freq => &self.freq,
            Field::Turns => &self.turns,
            Field::L => &self.l,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Od => &mut self.od,
            Field::Id => &mut self.id,
            Field::Ht => &mut self.ht,
            Field::Ae => &mut self.ae,
            Field::Le => &mut self.le,
            Field::WireD => &mut self.wire_d,
            Field::WireRo => &mut self.wire_ro,
            Field::Vin => &mut self.vin,
            Field::Vout => &mut self.vout,
            Field::Iout => &mut self.iout,
            Field::Freq => &mut self.freq,
            Field::Turns => &mut self.turns,
            Field::L => &mut self.l,
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        *self.slot_mut(field) = text.into();
    }

    /// Apply a "key=value" assignment, e.g. "freq=300kHz"
    pub fn assign(&mut self, assignment: &str) -> Result<Field, String> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| format!("Expected key=value, got '{}'", assignment))?;
        let field: Field = key.parse().map_err(|e| format!("{}", e))?;
        self.set(field, value.trim());
        Ok(field)
    }
}
