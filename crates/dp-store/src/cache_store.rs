use crate::{KeyValueStore, MemoryStore, Slot};

use std::str::FromStr;

use dp_core::{IdentityRecord, Locale, NotifyPref, Platform, Theme};
use log::{debug, warn};

/// Typed slot access over a durable key/value store.
///
/// None of these operations fail the caller. Storage errors are logged and
/// treated as absent values on read.
pub struct CacheStore {
    backend: Box<dyn KeyValueStore>,
}

impl CacheStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    fn read(&self, slot: Slot) -> Option<String> {
        match self.backend.get(slot.key()) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {}: {e}", slot.key());
                None
            }
        }
    }

    fn write(&mut self, slot: Slot, value: &str) {
        if let Err(e) = self.backend.set(slot.key(), value) {
            warn!("Failed to persist {}: {e} ({})", slot.key(), e.recovery_hint());
        }
    }

    fn read_parsed<T: FromStr + Default>(&self, slot: Slot) -> T {
        let Some(raw) = self.read(slot) else {
            return T::default();
        };

        raw.parse().unwrap_or_else(|_| {
            debug!("Ignoring unknown {} value {raw:?}", slot.key());
            T::default()
        })
    }

    /// Removes a slot.
    pub fn remove(&mut self, slot: Slot) {
        if let Err(e) = self.backend.remove(slot.key()) {
            warn!("Failed to remove {}: {e} ({})", slot.key(), e.recovery_hint());
        }
    }

    // =========================================================================
    // Identity slots
    // =========================================================================

    /// Cached identity for `platform`; a malformed record reads as absent.
    pub fn identity(&self, platform: Platform) -> Option<IdentityRecord> {
        let slot = Slot::identity(platform);
        let raw = self.read(slot)?;

        match serde_json::from_str::<Option<IdentityRecord>>(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!("Ignoring corrupted {}: {e}", slot.key());
                None
            }
        }
    }

    pub fn set_identity(&mut self, platform: Platform, record: &IdentityRecord) {
        let slot = Slot::identity(platform);
        match serde_json::to_string(record) {
            Ok(json) => self.write(slot, &json),
            Err(e) => warn!("Failed to encode {}: {e}", slot.key()),
        }
    }

    pub fn remove_identity(&mut self, platform: Platform) {
        self.remove(Slot::identity(platform));
    }

    // =========================================================================
    // Trade link
    // =========================================================================

    /// Stored trade link. An empty stored value reads as absent.
    pub fn trade_link(&self) -> Option<String> {
        self.read(Slot::TradeLink).filter(|v| !v.is_empty())
    }

    pub fn set_trade_link(&mut self, value: &str) {
        self.write(Slot::TradeLink, value);
    }

    pub fn remove_trade_link(&mut self) {
        self.remove(Slot::TradeLink);
    }

    // =========================================================================
    // Current user id
    // =========================================================================

    pub fn current_user_id(&self) -> Option<String> {
        self.read(Slot::CurrentUserId).filter(|v| !v.is_empty())
    }

    pub fn set_current_user_id(&mut self, user_id: &str) {
        self.write(Slot::CurrentUserId, user_id);
    }

    // =========================================================================
    // Preferences
    // =========================================================================

    pub fn locale(&self) -> Locale {
        self.read_parsed(Slot::Locale)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.write(Slot::Locale, locale.as_str());
    }

    pub fn theme(&self) -> Theme {
        self.read_parsed(Slot::Theme)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.write(Slot::Theme, theme.as_str());
    }

    pub fn notify(&self) -> NotifyPref {
        self.read_parsed(Slot::NotifyPrefs)
    }

    pub fn set_notify(&mut self, pref: NotifyPref) {
        self.write(Slot::NotifyPrefs, pref.as_str());
    }
}
