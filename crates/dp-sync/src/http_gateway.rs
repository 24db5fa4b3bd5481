use crate::wire::TradeLinkBody;
use crate::{FollowingSyncReport, HealthReport, SyncError, SyncGateway, SyncResult};

use std::time::Duration;

use async_trait::async_trait;
use dp_core::{FollowedEntry, Platform};
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

const USER_ID_PARAM: &str = "user_id";
const MAX_ERROR_BODY_LEN: usize = 200;

/// HTTP implementation of [`SyncGateway`] against the drops backend
pub struct HttpSyncGateway {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpSyncGateway {
    /// Create a gateway with reqwest's default client settings
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a gateway whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> SyncResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Where the front end sends the user to link `platform`.
    pub fn auth_start_url(&self, platform: Platform) -> String {
        format!("{}/auth/{}/start", self.base_url, platform.as_str())
    }

    /// Build an absolute URL with the optional `user_id` query parameter
    pub(crate) fn url(&self, path: &str, user_id: Option<&str>) -> SyncResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| SyncError::invalid_url(&raw, e.to_string()))?;

        if let Some(user_id) = user_id.filter(|id| !id.is_empty()) {
            url.query_pairs_mut().append_pair(USER_ID_PARAM, user_id);
        }

        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        user_id: Option<&str>,
    ) -> SyncResult<reqwest::RequestBuilder> {
        let url = self.url(path, user_id)?;
        debug!("{method} {url}");
        Ok(self.client.request(method, url))
    }

    /// Execute request and turn non-2xx statuses into errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> SyncResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(SyncError::status(status.as_u16(), error_message(&text)));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Pulls FastAPI's `detail` out of an error body, else a truncated body.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body)
        && let Some(detail) = value.get("detail").and_then(Value::as_str)
    {
        return detail.to_string();
    }

    body.chars().take(MAX_ERROR_BODY_LEN).collect()
}

/// Decodes a following list, skipping rows that do not form a valid entry.
pub(crate) fn decode_following(body: Value) -> SyncResult<Vec<FollowedEntry>> {
    let Value::Array(rows) = body else {
        return Err(SyncError::malformed("expected a JSON array of followed streamers"));
    };

    let entries = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<FollowedEntry>(row) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping malformed followed-streamer row: {e}");
                None
            }
        })
        .collect();

    Ok(entries)
}

#[async_trait]
impl SyncGateway for HttpSyncGateway {
    async fn fetch_trade_link(&self, user_id: Option<&str>) -> SyncResult<Option<String>> {
        let req = self.request(Method::GET, "/steam/link", user_id)?;
        let body: TradeLinkBody = serde_json::from_value(self.execute(req).await?)?;

        Ok(body.steam_trade_link.filter(|link| !link.is_empty()))
    }

    async fn save_trade_link(&self, user_id: Option<&str>, link: &str) -> SyncResult<()> {
        let body = TradeLinkBody {
            steam_trade_link: Some(link.to_string()),
        };
        let req = self
            .request(Method::POST, "/steam/link", user_id)?
            .json(&body);
        self.execute(req).await?;
        Ok(())
    }

    async fn fetch_following(&self, user_id: Option<&str>) -> SyncResult<Vec<FollowedEntry>> {
        let req = self.request(Method::GET, "/streamers/following", user_id)?;
        decode_following(self.execute(req).await?)
    }

    async fn request_following_sync(
        &self,
        user_id: Option<&str>,
    ) -> SyncResult<FollowingSyncReport> {
        let req = self.request(Method::POST, "/streamers/following/sync", user_id)?;
        Ok(serde_json::from_value(self.execute(req).await?)?)
    }

    async fn health(&self) -> SyncResult<HealthReport> {
        let req = self.request(Method::GET, "/health", None)?;
        Ok(serde_json::from_value(self.execute(req).await?)?)
    }
}
