use clap::Subcommand;

#[derive(Subcommand)]
pub enum FollowsCommands {
    /// List followed streamers, including linked accounts
    List,
    /// Ask the backend to refresh follow lists from the providers
    Sync,
}
