use crate::error::{CliError, Result as CliResult};
use crate::{
    commands::Commands, follows_commands::FollowsCommands, settings_commands::SettingsCommands,
    trade_link_commands::TradeLinkCommands,
};

use std::sync::Arc;

use dp_config::Config;
use dp_core::IdentityRecord;
use dp_profile::{AuthCallback, ProfileSession};
use dp_store::{CacheStore, FileStore};
use dp_sync::{HttpSyncGateway, SyncGateway};
use log::{info, warn};
use serde_json::{Value, json};

/// One CLI invocation: a profile session plus direct access to the gateway.
pub struct App {
    session: ProfileSession,
    gateway: Arc<HttpSyncGateway>,
}

impl App {
    pub fn new(cache: CacheStore, gateway: HttpSyncGateway) -> Self {
        let gateway = Arc::new(gateway);
        let session = ProfileSession::new(cache, gateway.clone());
        Self { session, gateway }
    }

    /// Build from configuration. `backend` overrides the configured URL.
    pub fn open(config: &Config, backend: Option<&str>) -> CliResult<Self> {
        let url = backend.unwrap_or(&config.backend.url);
        let gateway = HttpSyncGateway::with_timeout(url, config.backend.timeout())?;

        Ok(Self::new(open_cache(config)?, gateway))
    }

    pub fn session(&self) -> &ProfileSession {
        &self.session
    }

    /// Run one command and return its JSON output.
    pub async fn execute(&mut self, command: Commands) -> CliResult<Value> {
        let session = &mut self.session;

        let value = match command {
            Commands::Status => serde_json::to_value(session.refresh().await)?,

            Commands::Callback { input } => {
                let callback = AuthCallback::parse(&input);
                if callback.is_empty() {
                    warn!("Callback carried no recognised parameters");
                }
                serde_json::to_value(session.ingest_callback(&callback))?
            }

            Commands::Connect {
                platform,
                user,
                id,
                email,
                avatar,
            } => {
                if user.is_empty() {
                    return Err(CliError::invalid_argument("--user must not be empty"));
                }

                let mut record = IdentityRecord::new(user);
                record.id = id;
                record.email = email;
                record.avatar = avatar;
                serde_json::to_value(session.connect(platform, record))?
            }

            Commands::Disconnect { platform } => {
                let participation = session.disconnect(platform);
                json!({
                    "participation": participation,
                    "followed": session.followed_streamers().await,
                })
            }

            Commands::TradeLink { action } => match action {
                TradeLinkCommands::Show => {
                    json!({ "trade_link": session.load_trade_link().await })
                }
                TradeLinkCommands::Set { value } => {
                    let participation = session.set_trade_link(&value);
                    session.flush_mirror().await;
                    json!({
                        "trade_link": session.trade_link(),
                        "participation": participation,
                    })
                }
                TradeLinkCommands::Clear => {
                    let participation = session.clear_trade_link();
                    session.flush_mirror().await;
                    json!({ "trade_link": null, "participation": participation })
                }
            },

            Commands::Follows { action } => match action {
                FollowsCommands::List => serde_json::to_value(session.followed_streamers().await)?,
                FollowsCommands::Sync => {
                    let report = session.request_following_sync().await.ok_or_else(|| {
                        CliError::unavailable("Following sync failed (rate limited or backend down)")
                    })?;
                    serde_json::to_value(report)?
                }
            },

            Commands::Settings { action } => {
                let prefs = match action {
                    SettingsCommands::Show => session.preferences(),
                    SettingsCommands::Locale { locale } => session.set_locale(locale),
                    SettingsCommands::Theme { choice } => match choice.theme() {
                        Some(theme) => session.set_theme(theme),
                        None => session.toggle_theme(),
                    },
                    SettingsCommands::Notify { pref } => session.set_notify(pref),
                };
                serde_json::to_value(prefs)?
            }

            Commands::AuthUrl { platform } => json!({
                "platform": platform,
                "url": self.gateway.auth_start_url(platform),
            }),

            Commands::Health => serde_json::to_value(self.gateway.health().await?)?,
        };

        Ok(value)
    }
}

/// File-backed cache, or an in-memory one when the file cannot be opened.
fn open_cache(config: &Config) -> CliResult<CacheStore> {
    let path = config.store_path()?;

    match FileStore::open(&path) {
        Ok(store) => {
            info!("Profile cache: {}", path.display());
            Ok(CacheStore::new(store))
        }
        Err(e) => {
            warn!(
                "Cannot open profile cache {}: {e}. Changes will not be saved",
                path.display()
            );
            Ok(CacheStore::in_memory())
        }
    }
}
