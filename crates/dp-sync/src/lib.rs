//! Remote sync gateway.
//!
//! Loads and saves the Steam trade link and the followed-streamer list
//! against the backend. Every call is best-effort: callers treat an `Err`
//! as "no remote value" and carry on with local data.

pub(crate) mod error;
pub(crate) mod gateway;
pub(crate) mod http_gateway;
pub(crate) mod wire;


pub use error::{Result as SyncResult, SyncError};
pub use gateway::{OfflineGateway, SyncGateway};
pub use http_gateway::HttpSyncGateway;
pub use wire::{FollowingSyncReport, HealthReport, ProviderSyncResult};
