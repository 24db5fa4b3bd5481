use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationReason {
    Eligible,
    NeedsSocialAndTrade,
}

impl fmt::Display for ParticipationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eligible => f.write_str("You can join giveaways"),
            Self::NeedsSocialAndTrade => f.write_str("Connect Kick/Twitch and Steam trade link"),
        }
    }
}

/// Derived raffle eligibility. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participation {
    pub active: bool,
    pub reason: ParticipationReason,
    pub has_social: bool,
    pub has_trade: bool,
}
