pub mod followed_entry;
pub mod identity_record;
pub mod locale;
pub mod notify_pref;
pub mod participation;
pub mod platform;
pub mod theme;
