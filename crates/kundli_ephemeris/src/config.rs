//! Ephemeris configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ComputationError;

/// Where the provider's orbital-element table comes from.
///
/// With no `elements_path` the table compiled into the crate is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    pub elements_path: Option<PathBuf>,
}

impl EphemerisConfig {
    /// Load elements from a JSON file instead of the built-in table.
    pub fn with_elements_path(path: PathBuf) -> Self {
        Self {
            elements_path: Some(path),
        }
    }

    pub fn validate(&self) -> Result<(), ComputationError> {
        if let Some(path) = &self.elements_path {
            if path.as_os_str().is_empty() {
                return Err(ComputationError::InvalidInput(
                    "elements_path must not be empty",
                ));
            }
        }
        Ok(())
    }
}
