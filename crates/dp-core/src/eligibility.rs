//! Eligibility deriver.
//!
//! `active` holds exactly when at least one identity is connected and the
//! trade link is non-empty after trimming. The result is recomputed from
//! current inputs on every call.

use crate::{IdentityRecord, Participation, ParticipationReason};

pub fn has_social(record: Option<&IdentityRecord>) -> bool {
    record.is_some_and(IdentityRecord::is_connected)
}

pub fn has_trade(trade_link: &str) -> bool {
    !trade_link.trim().is_empty()
}

pub fn derive_participation(
    kick: Option<&IdentityRecord>,
    twitch: Option<&IdentityRecord>,
    trade_link: &str,
) -> Participation {
    let has_social = has_social(kick) || has_social(twitch);
    let has_trade = has_trade(trade_link);
    let active = has_social && has_trade;

    Participation {
        active,
        reason: if active {
            ParticipationReason::Eligible
        } else {
            ParticipationReason::NeedsSocialAndTrade
        },
        has_social,
        has_trade,
    }
}
