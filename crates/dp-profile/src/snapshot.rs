use dp_core::{FollowedEntry, IdentityRecord, Locale, NotifyPref, Participation, Theme};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Preferences {
    pub locale: Locale,
    pub theme: Theme,
    pub notify: NotifyPref,
}

/// Everything a front end renders, taken at one point in time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileSnapshot {
    pub kick: Option<IdentityRecord>,
    pub twitch: Option<IdentityRecord>,
    pub trade_link: Option<String>,
    pub user_id: Option<String>,
    pub participation: Participation,
    pub followed: Vec<FollowedEntry>,
    pub preferences: Preferences,
}
