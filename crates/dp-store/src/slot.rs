use dp_core::Platform;

/// One independently readable/writable cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    KickProfile,
    TwitchProfile,
    TradeLink,
    CurrentUserId,
    Locale,
    Theme,
    NotifyPrefs,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::KickProfile,
        Slot::TwitchProfile,
        Slot::TradeLink,
        Slot::CurrentUserId,
        Slot::Locale,
        Slot::Theme,
        Slot::NotifyPrefs,
    ];

    /// Persisted key name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::KickProfile => "kickProfile",
            Self::TwitchProfile => "twitchProfile",
            Self::TradeLink => "steamTradeLink",
            Self::CurrentUserId => "currentUserId",
            Self::Locale => "uiLocale",
            Self::Theme => "uiTheme",
            Self::NotifyPrefs => "notifyPrefs",
        }
    }

    pub fn identity(platform: Platform) -> Self {
        match platform {
            Platform::Kick => Self::KickProfile,
            Platform::Twitch => Self::TwitchProfile,
        }
    }
}
