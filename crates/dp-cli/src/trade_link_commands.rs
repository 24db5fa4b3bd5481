use clap::Subcommand;

#[derive(Subcommand)]
pub enum TradeLinkCommands {
    /// Show the trade link (asks the backend when nothing is cached)
    Show,
    /// Save a trade link; blank clears it
    Set {
        /// Steam trade offer URL
        value: String,
    },
    /// Remove the trade link locally and on the backend
    Clear,
}
