// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod session;

pub use cli::{Args, Command, run, run_with};
pub use config::resolve_store_path;
pub use crate::core::comparator::{compare, compare_inputs};
pub use crate::core::store::{FileStore, InputStore, MemoryStore};
pub use error::{InputError, StoreError};
pub use models::{ComparisonResult, Fuel, PriceInput, StoredInputs};
pub use session::{Session, SessionState};
