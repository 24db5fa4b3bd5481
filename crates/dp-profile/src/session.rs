use crate::{AuthCallback, Preferences, ProfileCommand, ProfileSnapshot};

use std::sync::Arc;

use dp_core::{
    FollowedEntry, IdentityRecord, Locale, NotifyPref, Participation, Platform, Theme,
    derive_participation, merge_followed, synthesize_fallback,
};
use dp_store::CacheStore;
use dp_sync::{FollowingSyncReport, SyncGateway};
use log::{debug, info, warn};
use tokio::task::JoinHandle;

/// Trade-link revision captured before a remote fetch suspends.
///
/// A response is only applied if no local trade-link edit happened since
/// the ticket was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTicket {
    revision: u64,
}

/// Reconciles the local cache with the backend.
///
/// The cache is the source of truth. Derived state is recomputed from it on
/// every query; nothing derived is cached here.
pub struct ProfileSession {
    cache: CacheStore,
    gateway: Arc<dyn SyncGateway>,
    trade_link_revision: u64,
    /// Latest trade-link POST; each one waits for its predecessor
    mirror: Option<JoinHandle<()>>,
}

impl ProfileSession {
    pub fn new(cache: CacheStore, gateway: Arc<dyn SyncGateway>) -> Self {
        Self {
            cache,
            gateway,
            trade_link_revision: 0,
            mirror: None,
        }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn identity(&self, platform: Platform) -> Option<IdentityRecord> {
        self.cache.identity(platform)
    }

    pub fn is_connected(&self, platform: Platform) -> bool {
        self.identity(platform)
            .is_some_and(|record| record.is_connected())
    }

    pub fn trade_link(&self) -> Option<String> {
        self.cache.trade_link()
    }

    pub fn current_user_id(&self) -> Option<String> {
        self.cache.current_user_id()
    }

    pub fn participation(&self) -> Participation {
        let kick = self.cache.identity(Platform::Kick);
        let twitch = self.cache.identity(Platform::Twitch);
        let trade_link = self.cache.trade_link().unwrap_or_default();

        derive_participation(kick.as_ref(), twitch.as_ref(), &trade_link)
    }

    /// Followed entries synthesized from the connected identities.
    pub fn local_fallback(&self) -> Vec<FollowedEntry> {
        let kick = self.cache.identity(Platform::Kick);
        let twitch = self.cache.identity(Platform::Twitch);

        synthesize_fallback(kick.as_ref(), twitch.as_ref())
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            locale: self.cache.locale(),
            theme: self.cache.theme(),
            notify: self.cache.notify(),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    pub fn dispatch(&mut self, command: ProfileCommand) -> Participation {
        match command {
            ProfileCommand::Connect { platform, record } => self.connect(platform, record),
            ProfileCommand::Disconnect { platform } => self.disconnect(platform),
            ProfileCommand::SetTradeLink { value } => self.set_trade_link(&value),
            ProfileCommand::ClearTradeLink => self.clear_trade_link(),
            ProfileCommand::IngestCallback(callback) => self.ingest_callback(&callback),
        }
    }

    /// Stores an identity produced by a completed auth flow.
    ///
    /// A record without a user is not a connection and leaves the slot as is.
    pub fn connect(&mut self, platform: Platform, record: IdentityRecord) -> Participation {
        if record.is_connected() {
            self.cache.set_identity(platform, &record);
            info!("Connected {platform} as {}", record.user);
        } else {
            debug!("Ignoring {platform} identity without a user");
        }

        self.participation()
    }

    /// Removes the platform's identity.
    ///
    /// The synthesized follow entry goes with it; callers that show the
    /// follow list re-run [`Self::followed_streamers`].
    pub fn disconnect(&mut self, platform: Platform) -> Participation {
        let was_connected = self.is_connected(platform);
        self.cache.remove_identity(platform);
        if was_connected {
            info!("Disconnected {platform}");
        }

        self.participation()
    }

    /// Saves a trimmed trade link locally and queues a mirror to the backend.
    ///
    /// An empty value after trimming clears the link. Returns without
    /// waiting for the backend; see [`Self::flush_mirror`].
    pub fn set_trade_link(&mut self, value: &str) -> Participation {
        let value = value.trim();

        if value.is_empty() {
            self.cache.remove_trade_link();
        } else {
            self.cache.set_trade_link(value);
        }
        self.trade_link_revision += 1;

        self.mirror_trade_link(value.to_string());
        self.participation()
    }

    pub fn clear_trade_link(&mut self) -> Participation {
        self.cache.remove_trade_link();
        self.trade_link_revision += 1;

        self.mirror_trade_link(String::new());
        self.participation()
    }

    pub fn ingest_callback(&mut self, callback: &AuthCallback) -> Participation {
        for platform in Platform::ALL {
            if let Some(record) = callback.identity(platform) {
                self.cache.set_identity(platform, record);
                info!("Auth callback linked {platform} as {}", record.user);
            }
        }

        if let Some(user_id) = &callback.user_id {
            self.cache.set_current_user_id(user_id);
            debug!("Auth callback set current user {user_id}");
        }

        self.participation()
    }

    /// Spawns the POST behind whatever mirror is still in flight, so the
    /// backend sees edits in the order they were made.
    fn mirror_trade_link(&mut self, value: String) {
        let gateway = Arc::clone(&self.gateway);
        let user_id = self.cache.current_user_id();
        let previous = self.mirror.take();

        self.mirror = Some(tokio::spawn(async move {
            if let Some(previous) = previous {
                // A failed predecessor has already been logged
                let _ = previous.await;
            }

            if let Err(e) = gateway.save_trade_link(user_id.as_deref(), &value).await {
                warn!("Failed to save trade link remotely: {e}");
            }
        }));
    }

    /// Waits until every queued trade-link POST has finished.
    pub async fn flush_mirror(&mut self) {
        if let Some(handle) = self.mirror.take()
            && let Err(e) = handle.await
        {
            warn!("Trade link mirror task did not complete: {e}");
        }
    }

    // =========================================================================
    // Remote reconciliation
    // =========================================================================

    pub fn sync_ticket(&self) -> SyncTicket {
        SyncTicket {
            revision: self.trade_link_revision,
        }
    }

    /// Applies a trade link fetched from the backend.
    ///
    /// Local edits win: the value is dropped when the ticket is stale or a
    /// local link already exists. Returns whether the cache changed.
    pub fn apply_remote_trade_link(&mut self, ticket: SyncTicket, remote: Option<String>) -> bool {
        let Some(link) = remote.filter(|link| !link.trim().is_empty()) else {
            return false;
        };

        if ticket.revision != self.trade_link_revision {
            debug!(
                "Discarding stale remote trade link (ticket r{}, current r{})",
                ticket.revision, self.trade_link_revision
            );
            return false;
        }

        if self.cache.trade_link().is_some() {
            debug!("Local trade link present, ignoring remote value");
            return false;
        }

        self.cache.set_trade_link(&link);
        info!("Adopted trade link from backend");
        true
    }

    /// Local trade link, falling back to the backend only when none is cached.
    ///
    /// Pending mirrors are flushed first so a just-cleared link is not read
    /// back from the backend.
    pub async fn load_trade_link(&mut self) -> Option<String> {
        if let Some(local) = self.cache.trade_link() {
            return Some(local);
        }

        self.flush_mirror().await;

        let ticket = self.sync_ticket();
        let gateway = Arc::clone(&self.gateway);
        let user_id = self.cache.current_user_id();

        let remote = match gateway.fetch_trade_link(user_id.as_deref()).await {
            Ok(remote) => remote,
            Err(e) => {
                warn!("Failed to load trade link: {e}");
                None
            }
        };

        self.apply_remote_trade_link(ticket, remote);
        self.cache.trade_link()
    }

    /// Remote follow list merged with the local fallback entries.
    ///
    /// The fallback is taken from the cache after the response arrives, so a
    /// disconnect during the request is honoured.
    pub async fn followed_streamers(&self) -> Vec<FollowedEntry> {
        let gateway = Arc::clone(&self.gateway);
        let user_id = self.cache.current_user_id();

        let remote = match gateway.fetch_following(user_id.as_deref()).await {
            Ok(entries) => Some(entries),
            Err(e) => {
                warn!("Failed to load followed streamers: {e}");
                None
            }
        };

        merge_followed(remote, self.local_fallback())
    }

    /// Asks the backend to resync follow lists. `None` when the call failed.
    pub async fn request_following_sync(&self) -> Option<FollowingSyncReport> {
        let gateway = Arc::clone(&self.gateway);
        let user_id = self.cache.current_user_id();

        match gateway.request_following_sync(user_id.as_deref()).await {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Failed to request following sync: {e}");
                None
            }
        }
    }

    /// Initial load: trade link, follow list and derived state.
    pub async fn refresh(&mut self) -> ProfileSnapshot {
        let trade_link = self.load_trade_link().await;
        let followed = self.followed_streamers().await;

        ProfileSnapshot {
            kick: self.cache.identity(Platform::Kick),
            twitch: self.cache.identity(Platform::Twitch),
            trade_link,
            user_id: self.cache.current_user_id(),
            participation: self.participation(),
            followed,
            preferences: self.preferences(),
        }
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    pub fn set_locale(&mut self, locale: Locale) -> Preferences {
        self.cache.set_locale(locale);
        self.preferences()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Preferences {
        self.cache.set_theme(theme);
        self.preferences()
    }

    pub fn toggle_theme(&mut self) -> Preferences {
        let next = self.cache.theme().toggled();
        self.set_theme(next)
    }

    pub fn set_notify(&mut self, notify: NotifyPref) -> Preferences {
        self.cache.set_notify(notify);
        self.preferences()
    }
}
