use dp_core::{Locale, NotifyPref, Theme};

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current preferences
    Show,
    /// Set the interface language
    Locale {
        /// ru or en
        locale: Locale,
    },
    /// Set or toggle the color theme
    Theme { choice: ThemeChoice },
    /// Turn notifications on or off
    Notify {
        /// on or off
        pref: NotifyPref,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}

impl ThemeChoice {
    /// The theme to store, or `None` for a toggle.
    pub fn theme(self) -> Option<Theme> {
        match self {
            ThemeChoice::Dark => Some(Theme::Dark),
            ThemeChoice::Light => Some(Theme::Light),
            ThemeChoice::Toggle => None,
        }
    }
}
