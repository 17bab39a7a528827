pub mod fields;
pub mod store;
pub mod validation;
pub mod values;


pub use fields::*;
pub use store::*;
pub use validation::*;
pub use values::*;
