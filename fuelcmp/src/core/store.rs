// src/core/store.rs
use crate::error::StoreError;
use crate::models::StoredInputs;
use std::fs;
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key-value storage for the last committed pair of price texts.
pub trait InputStore {
    /// Reads both keys. Missing keys come back as `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the underlying storage cannot be read.
    fn load(&self) -> Result<StoredInputs, StoreError>;

    /// Overwrites both keys with the given raw texts.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the underlying storage cannot be written.
    fn save(&mut self, ethanol: &str, gasoline: &str) -> Result<(), StoreError>;
}

/// Stores the inputs as a small TOML document on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl InputStore for FileStore {
    fn load(&self) -> Result<StoredInputs, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no stored inputs yet");
                return Ok(StoredInputs::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        toml::from_str(&content).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, ethanol: &str, gasoline: &str) -> Result<(), StoreError> {
        let content = toml::to_string(&StoredInputs::new(ethanol, gasoline))?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| self.io_error(e))?;

        // Write beside the target and rename so a reader never sees half a file.
        let mut staged = NamedTempFile::new_in(&parent).map_err(|e| self.io_error(e))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| self.io_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        tracing::debug!(path = %self.path.display(), "stored inputs saved");
        Ok(())
    }
}

/// Keeps the inputs in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inputs: StoredInputs,
    available: bool,
    saves: usize,
}

impl MemoryStore {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_inputs(StoredInputs::default())
    }

    #[inline]
    #[must_use]
    pub const fn with_inputs(inputs: StoredInputs) -> Self {
        Self {
            inputs,
            available: true,
            saves: 0,
        }
    }

    /// A store whose every read and write fails, like missing device storage.
    #[inline]
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Number of successful writes so far.
    #[inline]
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InputStore for MemoryStore {
    fn load(&self) -> Result<StoredInputs, StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        Ok(self.inputs.clone())
    }

    fn save(&mut self, ethanol: &str, gasoline: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.inputs = StoredInputs::new(ethanol, gasoline);
        self.saves = self.saves.saturating_add(1);
        Ok(())
    }
}
