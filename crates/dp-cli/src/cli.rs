use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "drops")]
#[command(about = "Drops profile CLI: linked accounts, trade link and followed streamers")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config.toml and DP_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
