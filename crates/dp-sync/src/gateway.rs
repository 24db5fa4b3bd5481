use crate::{FollowingSyncReport, HealthReport, SyncError, SyncResult};

use async_trait::async_trait;
use dp_core::FollowedEntry;

/// Backend operations the reconciliation core consumes.
///
/// `user_id` is appended as `?user_id=` when present.
#[async_trait]
pub trait SyncGateway: Send + Sync {
    /// Remote trade link; `Ok(None)` when the backend has none.
    async fn fetch_trade_link(&self, user_id: Option<&str>) -> SyncResult<Option<String>>;

    async fn save_trade_link(&self, user_id: Option<&str>, link: &str) -> SyncResult<()>;

    async fn fetch_following(&self, user_id: Option<&str>) -> SyncResult<Vec<FollowedEntry>>;

    /// Asks the backend to refresh its cached follow lists from the platforms.
    async fn request_following_sync(
        &self,
        user_id: Option<&str>,
    ) -> SyncResult<FollowingSyncReport>;

    async fn health(&self) -> SyncResult<HealthReport>;
}

/// Gateway for running without network access. Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGateway;

#[async_trait]
impl SyncGateway for OfflineGateway {
    async fn fetch_trade_link(&self, _user_id: Option<&str>) -> SyncResult<Option<String>> {
        Err(SyncError::offline())
    }

    async fn save_trade_link(&self, _user_id: Option<&str>, _link: &str) -> SyncResult<()> {
        Err(SyncError::offline())
    }

    async fn fetch_following(&self, _user_id: Option<&str>) -> SyncResult<Vec<FollowedEntry>> {
        Err(SyncError::offline())
    }

    async fn request_following_sync(
        &self,
        _user_id: Option<&str>,
    ) -> SyncResult<FollowingSyncReport> {
        Err(SyncError::offline())
    }

    async fn health(&self) -> SyncResult<HealthReport> {
        Err(SyncError::offline())
    }
}
