//! Identity merge engine.
//!
//! Combines the backend's followed-streamer list with entries synthesized
//! from locally connected identities. Remote entries keep their order and
//! win on a duplicate `(platform, login)` key; novel local entries are
//! appended in local order.

use crate::{FollowKey, FollowedEntry, IdentityRecord, Platform};

use std::collections::HashSet;

/// Merges a remote list (absent when the call failed) with the local
/// fallback. The result never contains two entries with the same key.
pub fn merge_followed(
    remote: Option<Vec<FollowedEntry>>,
    local_fallback: Vec<FollowedEntry>,
) -> Vec<FollowedEntry> {
    let remote = remote.unwrap_or_default();
    let capacity = remote.len() + local_fallback.len();

    let mut seen: HashSet<FollowKey> = HashSet::with_capacity(capacity);
    let mut merged = Vec::with_capacity(capacity);

    for entry in remote.into_iter().chain(local_fallback) {
        if seen.insert(entry.key()) {
            merged.push(entry);
        }
    }

    merged
}

/// One entry per connected identity, Kick first, with `followers = 0`.
pub fn synthesize_fallback(
    kick: Option<&IdentityRecord>,
    twitch: Option<&IdentityRecord>,
) -> Vec<FollowedEntry> {
    [(Platform::Kick, kick), (Platform::Twitch, twitch)]
        .into_iter()
        .filter_map(|(platform, record)| {
            record.and_then(|r| FollowedEntry::synthesized(platform, r))
        })
        .collect()
}
