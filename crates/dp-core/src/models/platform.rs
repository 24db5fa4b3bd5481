use crate::{CoreError, CoreResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Streaming platform an identity or a followed streamer belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Kick,
    Twitch,
}

impl Platform {
    /// Every platform, in the order synthesized entries are emitted.
    pub const ALL: [Platform; 2] = [Platform::Kick, Platform::Twitch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Twitch => "twitch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kick" => Ok(Self::Kick),
            "twitch" => Ok(Self::Twitch),
            _ => Err(CoreError::invalid_platform(s)),
        }
    }
}
