
use crate::{FollowedEntry, Platform};

pub(crate) fn entry(platform: Platform, login: &str, followers: u64) -> FollowedEntry {
    FollowedEntry {
        platform,
        login: login.to_string(),
        display_name: login.to_string(),
        followers,
        avatar: None,
        is_live: None,
    }
}
