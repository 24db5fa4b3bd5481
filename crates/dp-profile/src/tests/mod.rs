mod session;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dp_core::FollowedEntry;
use dp_sync::{FollowingSyncReport, HealthReport, SyncError, SyncGateway, SyncResult};

/// In-process gateway with canned responses that records what it was sent.
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    /// `None` makes `fetch_trade_link` fail
    pub trade_link: Option<Option<String>>,
    /// `None` makes `fetch_following` fail
    pub following: Option<Vec<FollowedEntry>>,
    pub fail_saves: bool,
    /// Saves are recorded, then never complete
    pub hang_saves: bool,
    pub saved: Mutex<Vec<(Option<String>, String)>>,
    pub trade_link_fetches: AtomicUsize,
    pub following_user_ids: Mutex<Vec<Option<String>>>,
}

impl ScriptedGateway {
    pub(crate) fn saved(&self) -> Vec<(Option<String>, String)> {
        self.saved.lock().unwrap().clone()
    }

    pub(crate) fn trade_link_fetches(&self) -> usize {
        self.trade_link_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SyncGateway for ScriptedGateway {
    async fn fetch_trade_link(&self, _user_id: Option<&str>) -> SyncResult<Option<String>> {
        self.trade_link_fetches.fetch_add(1, Ordering::SeqCst);
        self.trade_link
            .clone()
            .ok_or_else(|| SyncError::status(500, "scripted failure"))
    }

    async fn save_trade_link(&self, user_id: Option<&str>, link: &str) -> SyncResult<()> {
        self.saved
            .lock()
            .unwrap()
            .push((user_id.map(String::from), link.to_string()));
        if self.hang_saves {
            std::future::pending::<()>().await;
        }
        if self.fail_saves {
            return Err(SyncError::offline());
        }
        Ok(())
    }

    async fn fetch_following(&self, user_id: Option<&str>) -> SyncResult<Vec<FollowedEntry>> {
        self.following_user_ids
            .lock()
            .unwrap()
            .push(user_id.map(String::from));
        self.following
            .clone()
            .ok_or_else(|| SyncError::malformed("scripted failure"))
    }

    async fn request_following_sync(
        &self,
        _user_id: Option<&str>,
    ) -> SyncResult<FollowingSyncReport> {
        Err(SyncError::status(429, "Too many sync requests. Try again later."))
    }

    async fn health(&self) -> SyncResult<HealthReport> {
        Ok(HealthReport {
            ok: true,
            service: Some("scripted".into()),
        })
    }
}
