use crate::{IdentityRecord, Platform};

use serde::{Deserialize, Deserializer, Serialize};

/// Identity key of a followed streamer.
pub type FollowKey = (Platform, String);

/// Display record for one followed streamer.
///
/// The backend's cached rows name the login `streamer_id` and the display
/// name `name`; both spellings decode into the same fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowedEntry {
    pub platform: Platform,
    #[serde(alias = "streamer_id")]
    pub login: String,
    #[serde(default, alias = "name")]
    pub display_name: String,
    #[serde(default, deserialize_with = "followers_or_zero")]
    pub followers: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_live: Option<bool>,
}

impl FollowedEntry {
    /// Builds the local fallback entry for a connected identity.
    ///
    /// Returns `None` when the record has no user.
    pub fn synthesized(platform: Platform, record: &IdentityRecord) -> Option<Self> {
        if !record.is_connected() {
            return None;
        }

        Some(Self {
            platform,
            login: record.user.clone(),
            display_name: record.user.clone(),
            followers: 0,
            avatar: record.avatar.clone(),
            is_live: None,
        })
    }

    pub fn key(&self) -> FollowKey {
        (self.platform, self.login.clone())
    }
}

fn followers_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}
