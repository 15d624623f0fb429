// src/models/stored_inputs.rs
use serde::{Deserialize, Serialize};

/// Snapshot of the last committed price texts, as kept by an input store.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredInputs {
    #[serde(rename = "alcool", default, skip_serializing_if = "Option::is_none")]
    pub ethanol: Option<String>,
    #[serde(rename = "gasolina", default, skip_serializing_if = "Option::is_none")]
    pub gasoline: Option<String>,
}

impl StoredInputs {
    #[inline]
    #[must_use]
    pub fn new(ethanol: impl Into<String>, gasoline: impl Into<String>) -> Self {
        Self {
            ethanol: Some(ethanol.into()),
            gasoline: Some(gasoline.into()),
        }
    }
}
