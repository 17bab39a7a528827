// Engineering-notation quantities: "12.5kHz" -> 12500.0 Hz
// Fixed unit and prefix tables, suffix matching in table order

pub mod detector;
pub mod error;
pub mod parser;
pub mod units;
pub mod validator;

pub use detector::looks_like_quantity;
pub use error::{ParseError, UnitSymbolError, ValidationError};
pub use parser::{parse, ParsedQuantity};
pub use units::{Prefix, UnitSymbol};
pub use validator::validate;
