// src/config.rs
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const STORE_ENV_VAR: &str = "FUELCMP_STORE";
const CONFIG_DIR_NAME: &str = "fuelcmp";
const STORE_FILENAME: &str = "inputs.toml";

/// Resolves where the input store lives.
///
/// Tries, in order: the explicit path, the `FUELCMP_STORE` environment
/// variable, the XDG config directory, and finally a dotfile in the
/// working directory.
#[must_use]
pub fn resolve_store_path(explicit: Option<&Path>) -> PathBuf {
    resolve_store_path_with(explicit, |key| env::var_os(key))
}

/// Same as [`resolve_store_path`], reading variables through `lookup`.
///
/// Variables set to an empty string count as unset.
#[must_use]
pub fn resolve_store_path_with(
    explicit: Option<&Path>,
    lookup: impl Fn(&str) -> Option<OsString>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = var(STORE_ENV_VAR) {
        return PathBuf::from(path);
    }

    let config_dir = var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| var("HOME").map(|home| PathBuf::from(home).join(".config")));

    match config_dir {
        Some(dir) => dir.join(CONFIG_DIR_NAME).join(STORE_FILENAME),
        None => cwd_store_path(),
    }
}

fn cwd_store_path() -> PathBuf {
    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{CONFIG_DIR_NAME}_{STORE_FILENAME}"))
}
