use lazy_static::lazy_static;
use regex::Regex;

use crate::quantity::parser::normalize;

lazy_static! {
    /// Regex pattern for the accepted shape of a quantity string (after normalization)
    /// Matches: number (optional decimal, optional exponent) + optional prefix and unit
    /// Examples: "12.5kHz", "4.7uH", "10mm", "8", "1e-3V"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?([pnumcdkMG]?(Hz|m|A|V|H))?$"
    ).unwrap();
}

/// Check if a string has the shape of an engineering quantity.
/// Only used to give a better hint when parsing fails.
pub fn looks_like_quantity(s: &str) -> bool {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(&normalized)
}

/// Short description of the accepted input syntax
pub fn syntax_hint() -> &'static str {
    "expected <number>[prefix][unit], prefix one of p n u m c d k M G, unit one of Hz m A V H"
}
