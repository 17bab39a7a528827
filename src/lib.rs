pub mod design;
pub mod form;
pub mod quantity;
pub mod report;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
