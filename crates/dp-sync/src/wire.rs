use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `GET`/`POST /steam/link`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TradeLinkBody {
    #[serde(rename = "steamTradeLink", default)]
    pub steam_trade_link: Option<String>,
}

/// Response of `POST /streamers/following/sync`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowingSyncReport {
    pub ok: bool,
    #[serde(default)]
    pub results: BTreeMap<String, ProviderSyncResult>,
    #[serde(default)]
    pub cached_ttl_s: Option<u64>,
}

/// Per-provider outcome of a manual following sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderSyncResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthReport {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}
