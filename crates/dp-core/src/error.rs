use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid platform: {value} {location}")]
    InvalidPlatform {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid {kind} preference: {value} {location}")]
    InvalidPreference {
        kind: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_platform(value: impl Into<String>) -> Self {
        Self::InvalidPlatform {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_preference(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidPreference {
            kind,
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
