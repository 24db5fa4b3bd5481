use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during backend calls
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Backend returned {status}: {message} {location}")]
    Status {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Backend rate limited the request: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed response: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid backend URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Backend unavailable: offline mode {location}")]
    Offline { location: ErrorLocation },
}

impl SyncError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SyncError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        SyncError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Map a non-2xx status to the matching variant
    #[track_caller]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if status == 429 {
            SyncError::RateLimited {
                message: message.into(),
                location,
            }
        } else {
            SyncError::Status {
                status,
                message: message.into(),
                location,
            }
        }
    }

    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        SyncError::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        SyncError::InvalidUrl {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn offline() -> Self {
        SyncError::Offline {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SyncError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for SyncError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        SyncError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
