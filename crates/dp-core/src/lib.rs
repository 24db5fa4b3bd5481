//! Domain model and pure reconciliation rules for the profile panel.
//!
//! Nothing in this crate performs I/O: the merge engine and the eligibility
//! deriver are functions over snapshots handed in by the caller.

pub mod eligibility;
pub mod error;
pub mod merge;
pub mod models;

#[cfg(test)]
mod tests;

pub use eligibility::{derive_participation, has_social, has_trade};
pub use error::{CoreError, Result as CoreResult};
pub use merge::{merge_followed, synthesize_fallback};
pub use models::followed_entry::{FollowKey, FollowedEntry};
pub use models::identity_record::IdentityRecord;
pub use models::locale::Locale;
pub use models::notify_pref::NotifyPref;
pub use models::participation::{Participation, ParticipationReason};
pub use models::platform::Platform;
pub use models::theme::Theme;
