use crate::{
    follows_commands::FollowsCommands, settings_commands::SettingsCommands,
    trade_link_commands::TradeLinkCommands,
};

use dp_core::Platform;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Load everything and print the profile snapshot
    Status,

    /// Apply an auth callback (full redirect URL or its query string)
    Callback {
        /// e.g. "http://localhost:5173/?kick_user=bob&user_id=7"
        input: String,
    },

    /// Store a platform identity by hand
    Connect {
        /// kick or twitch
        platform: Platform,
        #[arg(long)]
        user: String,
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Forget a platform identity
    Disconnect {
        /// kick or twitch
        platform: Platform,
    },

    /// Steam trade link operations
    TradeLink {
        #[command(subcommand)]
        action: TradeLinkCommands,
    },

    /// Followed streamer operations
    Follows {
        #[command(subcommand)]
        action: FollowsCommands,
    },

    /// UI preferences
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Print the URL that starts the auth flow for a platform
    AuthUrl {
        /// kick or twitch
        platform: Platform,
    },

    /// Check that the backend is reachable
    Health,
}
