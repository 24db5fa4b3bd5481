//! Reconciliation session for the profile panel.
//!
//! [`ProfileSession`] owns the local cache and consumes a sync gateway.
//! Every command returns the participation state derived from the cache
//! as it stands after the command.

pub(crate) mod auth_callback;
pub(crate) mod command;
pub(crate) mod session;
pub(crate) mod snapshot;

#[cfg(test)]
mod tests;

pub use auth_callback::AuthCallback;
pub use command::ProfileCommand;
pub use session::{ProfileSession, SyncTicket};
pub use snapshot::{Preferences, ProfileSnapshot};
