use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORE_FILE};

use std::path::Path;

use serde::Deserialize;

/// Location of the local profile cache, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_STORE_FILE),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::store("store.file cannot be empty"));
        }

        if Path::new(&self.file).is_absolute() || self.file.contains("..") {
            return Err(ConfigError::store(
                "store.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
