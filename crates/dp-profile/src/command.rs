use crate::AuthCallback;

use dp_core::{IdentityRecord, Platform};

/// Mutations a front end can request from the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileCommand {
    Connect {
        platform: Platform,
        record: IdentityRecord,
    },
    Disconnect {
        platform: Platform,
    },
    SetTradeLink {
        value: String,
    },
    ClearTradeLink,
    IngestCallback(AuthCallback),
}
