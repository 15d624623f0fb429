// src/models.rs
pub mod comparison_result;
pub mod fuel;
pub mod price_input;
pub mod stored_inputs;

pub use comparison_result::ComparisonResult;
pub use fuel::Fuel;
pub use price_input::PriceInput;
pub use stored_inputs::StoredInputs;
