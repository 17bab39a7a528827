use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::quantity::error::UnitSymbolError;

/// Physical unit recognised as the trailing suffix of a quantity string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSymbol {
    Frequency,
    Length,
    Current,
    Voltage,
    Inductance,
    Dimensionless,
}

impl UnitSymbol {
    /// Suffix match order. "Hz" has to be tried before the one-letter units,
    /// otherwise "kHz" would be split at "H".
    pub const MATCH_ORDER: [UnitSymbol; 5] = [
        UnitSymbol::Frequency,
        UnitSymbol::Length,
        UnitSymbol::Current,
        UnitSymbol::Voltage,
        UnitSymbol::Inductance,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitSymbol::Frequency => "Hz",
            UnitSymbol::Length => "m",
            UnitSymbol::Current => "A",
            UnitSymbol::Voltage => "V",
            UnitSymbol::Inductance => "H",
            UnitSymbol::Dimensionless => "",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnitSymbol::Frequency => "hertz",
            UnitSymbol::Length => "meter",
            UnitSymbol::Current => "ampere",
            UnitSymbol::Voltage => "volt",
            UnitSymbol::Inductance => "henry",
            UnitSymbol::Dimensionless => "dimensionless",
        }
    }

    /// Strip this unit's symbol from the end of `text`.
    /// The dimensionless unit never matches: it is what you get when nothing else does.
    pub(crate) fn strip_from<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            UnitSymbol::Dimensionless => None,
            unit => text.strip_suffix(unit.symbol()),
        }
    }
}

impl fmt::Display for UnitSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSymbol::Dimensionless => write!(f, "(none)"),
            unit => write!(f, "{}", unit.symbol()),
        }
    }
}

impl FromStr for UnitSymbol {
    type Err = UnitSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" | "-" => Ok(UnitSymbol::Dimensionless),
            other => UnitSymbol::MATCH_ORDER
                .iter()
                .find(|u| u.symbol() == other)
                .copied()
                .ok_or_else(|| UnitSymbolError(other.to_string())),
        }
    }
}

/// SI prefix multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    None,
    Kilo,
    Mega,
    Giga,
}

impl Prefix {
    /// Suffix match order. `Prefix::None` is left out: it is the fallback
    /// when no letter matches and must never be matched itself.
    pub const MATCH_ORDER: [Prefix; 9] = [
        Prefix::Pico,
        Prefix::Nano,
        Prefix::Micro,
        Prefix::Milli,
        Prefix::Centi,
        Prefix::Deci,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "u",
            Prefix::Milli => "m",
            Prefix::Centi => "c",
            Prefix::Deci => "d",
            Prefix::None => "",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Prefix::Pico => 1.0e-12,
            Prefix::Nano => 1.0e-9,
            Prefix::Micro => 1.0e-6,
            Prefix::Milli => 1.0e-3,
            Prefix::Centi => 1.0e-2,
            Prefix::Deci => 1.0e-1,
            Prefix::None => 1.0,
            Prefix::Kilo => 1.0e3,
            Prefix::Mega => 1.0e6,
            Prefix::Giga => 1.0e9,
        }
    }

    /// Split a prefix off the end of `text`, falling back to `Prefix::None`.
    pub(crate) fn split_from(text: &str) -> (&str, Prefix) {
        Prefix::MATCH_ORDER
            .iter()
            .find_map(|p| text.strip_suffix(p.token()).map(|rest| (rest, *p)))
            .unwrap_or((text, Prefix::None))
    }
}
