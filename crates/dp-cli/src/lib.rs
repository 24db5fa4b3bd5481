//! dp-cli library
//!
//! Argument parsing, logger setup and command execution for the `drops`
//! binary, exported so they can be driven from tests.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod follows_commands;
pub mod logger;
pub(crate) mod settings_commands;
pub(crate) mod trade_link_commands;


pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use follows_commands::FollowsCommands;
pub use settings_commands::{SettingsCommands, ThemeChoice};
pub use trade_link_commands::TradeLinkCommands;
