// src/core.rs
pub mod comparator;
pub mod store;
