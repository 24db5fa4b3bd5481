use std::borrow::Cow;
use std::collections::HashMap;

use dp_core::{IdentityRecord, Platform};
use reqwest::Url;

const QUERY_BASE: &str = "http://localhost/";

/// Identity data deposited by a completed OAuth flow.
///
/// Read once from the landing URL's query string. Missing or empty
/// parameters are absent, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthCallback {
    pub kick: Option<IdentityRecord>,
    pub twitch: Option<IdentityRecord>,
    pub user_id: Option<String>,
}

impl AuthCallback {
    /// Accepts a full landing URL or a bare query string.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match Url::parse(input) {
            Ok(url) => Self::from_url(&url),
            Err(_) => Self::from_query(input),
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs())
    }

    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        match Url::parse(QUERY_BASE) {
            Ok(mut url) => {
                url.set_query(Some(query));
                Self::from_url(&url)
            }
            Err(_) => Self::default(),
        }
    }

    fn from_pairs<'a>(pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>) -> Self {
        // First occurrence of a key wins
        let mut params: HashMap<String, String> = HashMap::new();
        for (key, value) in pairs {
            if !value.is_empty() {
                params
                    .entry(key.into_owned())
                    .or_insert_with(|| value.into_owned());
            }
        }

        let kick = params.get("kick_user").map(|user| IdentityRecord {
            user: user.clone(),
            id: params.get("kick_id").cloned(),
            email: params.get("kick_email").cloned(),
            avatar: params.get("kick_avatar").cloned(),
        });

        let twitch = params.get("twitch_user").map(|user| IdentityRecord {
            user: user.clone(),
            id: params.get("twitch_id").cloned(),
            email: None,
            avatar: params.get("twitch_avatar").cloned(),
        });

        Self {
            kick,
            twitch,
            user_id: params.get("user_id").cloned(),
        }
    }

    pub fn identity(&self, platform: Platform) -> Option<&IdentityRecord> {
        match platform {
            Platform::Kick => self.kick.as_ref(),
            Platform::Twitch => self.twitch.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kick.is_none() && self.twitch.is_none() && self.user_id.is_none()
    }
}
