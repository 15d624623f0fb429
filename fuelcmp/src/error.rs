// src/error.rs
use std::io;
use std::path::PathBuf;

/// Rejection of a calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// One of the prices is empty or not a number.
    #[error("Please enter valid prices for both ethanol and gasoline.")]
    InvalidInput,
}

/// Failure of the backing key-value storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access input store {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input store {} is not valid TOML: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to encode stored inputs: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("input storage is unavailable")]
    Unavailable,
}
