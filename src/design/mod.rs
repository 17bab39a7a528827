pub mod calculator;
pub mod inputs;

pub use calculator::*;
pub use inputs::*;
