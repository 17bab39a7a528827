use thiserror::Error;

use crate::quantity::units::UnitSymbol;

/// Failure inside the quantity parser itself
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// What is left after stripping unit and prefix is not a float literal
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Field-level failure reported by the validation wrapper
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid input '{input}': {source}")]
    Unparseable {
        input: String,
        #[source]
        source: ParseError,
    },
    #[error("expected physical unit '{expected}' but '{found}' was entered")]
    UnitMismatch {
        expected: UnitSymbol,
        found: UnitSymbol,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown unit symbol '{0}' (expected one of Hz, m, A, V, H, none)")]
pub struct UnitSymbolError(pub String);
