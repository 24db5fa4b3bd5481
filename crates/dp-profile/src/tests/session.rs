use crate::tests::ScriptedGateway;
use crate::{AuthCallback, ProfileCommand, ProfileSession};

use std::sync::Arc;

use dp_core::{
    FollowedEntry, IdentityRecord, Locale, NotifyPref, ParticipationReason, Platform, Theme,
};
use dp_store::CacheStore;
use googletest::prelude::*;

fn session_with(gateway: ScriptedGateway) -> (ProfileSession, Arc<ScriptedGateway>) {
    let gateway = Arc::new(gateway);
    let session = ProfileSession::new(CacheStore::in_memory(), gateway.clone());
    (session, gateway)
}

fn offline_session() -> (ProfileSession, Arc<ScriptedGateway>) {
    session_with(ScriptedGateway {
        fail_saves: true,
        ..ScriptedGateway::default()
    })
}

fn remote_entry(platform: Platform, login: &str, followers: u64) -> FollowedEntry {
    FollowedEntry {
        platform,
        login: login.to_string(),
        display_name: login.to_string(),
        followers,
        avatar: None,
        is_live: None,
    }
}

// =============================================================================
// Connect / disconnect
// =============================================================================

#[tokio::test]
async fn given_fresh_session_when_participation_then_inactive() {
    let (session, _) = offline_session();

    let participation = session.participation();

    assert_that!(participation.active, eq(false));
    assert_that!(
        participation.reason,
        eq(ParticipationReason::NeedsSocialAndTrade)
    );
}

#[tokio::test]
async fn given_kick_connected_when_trade_link_set_then_active() {
    // Given
    let (mut session, _) = offline_session();
    session.connect(Platform::Kick, IdentityRecord::new("bob"));

    // When
    let participation = session.set_trade_link("https://x");

    // Then
    assert_that!(participation.active, eq(true));
    assert_that!(participation.reason, eq(ParticipationReason::Eligible));
}

#[tokio::test]
async fn given_record_without_user_when_connect_then_still_disconnected() {
    let (mut session, _) = offline_session();

    session.connect(Platform::Twitch, IdentityRecord::default().with_id("5"));

    assert_that!(session.is_connected(Platform::Twitch), eq(false));
    assert_that!(session.identity(Platform::Twitch), none());
}

#[tokio::test]
async fn given_sole_social_connection_when_disconnected_then_inactive() {
    // Given
    let (mut session, _) = offline_session();
    session.connect(Platform::Kick, IdentityRecord::new("bob"));
    assert_that!(session.set_trade_link("https://x").active, eq(true));

    // When
    let participation = session.disconnect(Platform::Kick);

    // Then
    assert_that!(participation.active, eq(false));
    assert_that!(participation.has_trade, eq(true));
    assert_that!(session.identity(Platform::Kick), none());
}

#[tokio::test]
async fn given_both_connected_when_one_disconnected_then_still_active() {
    let (mut session, _) = offline_session();
    session.connect(Platform::Kick, IdentityRecord::new("bob"));
    session.connect(Platform::Twitch, IdentityRecord::new("alice"));
    session.set_trade_link("https://x");

    let participation = session.disconnect(Platform::Twitch);

    assert_that!(participation.active, eq(true));
}

#[tokio::test]
async fn given_disconnected_platform_when_disconnected_again_then_no_op() {
    let (mut session, _) = offline_session();

    let participation = session.disconnect(Platform::Twitch);

    assert_that!(participation.active, eq(false));
}

#[tokio::test]
async fn given_disconnect_when_followed_reloaded_then_synthesized_entry_dropped() {
    // Given
    let (mut session, _) = offline_session();
    session.connect(Platform::Kick, IdentityRecord::new("bob"));
    session.connect(Platform::Twitch, IdentityRecord::new("alice"));
    assert_that!(session.followed_streamers().await.len(), eq(2));

    // When
    session.disconnect(Platform::Kick);
    let followed = session.followed_streamers().await;

    // Then
    assert_that!(followed.len(), eq(1));
    assert_that!(followed[0].platform, eq(Platform::Twitch));
}

// =============================================================================
// Trade link
// =============================================================================

#[tokio::test]
async fn given_padded_value_when_set_then_trimmed_and_mirrored() {
    // Given
    let (mut session, gateway) = session_with(ScriptedGateway::default());
    session.ingest_callback(&AuthCallback::from_query("user_id=42"));

    // When
    session.set_trade_link("  https://x  ");
    session.flush_mirror().await;

    // Then
    assert_that!(session.trade_link(), some(eq("https://x")));
    assert_that!(
        gateway.saved(),
        eq(&vec![(Some("42".to_string()), "https://x".to_string())])
    );
}

#[tokio::test]
async fn given_whitespace_value_when_set_then_cleared() {
    let (mut session, gateway) = offline_session();
    session.set_trade_link("https://x");

    let participation = session.set_trade_link("   ");
    session.flush_mirror().await;

    let saved = gateway.saved();
    assert_that!(session.trade_link(), none());
    assert_that!(participation.has_trade, eq(false));
    assert_that!(saved.last().map(|(_, link)| link.as_str()), some(eq("")));
}

#[tokio::test]
async fn given_remote_save_fails_when_set_then_local_value_kept() {
    let (mut session, gateway) = offline_session();
    session.connect(Platform::Twitch, IdentityRecord::new("alice"));

    let participation = session.set_trade_link("https://x");
    session.flush_mirror().await;

    assert_that!(gateway.saved().len(), eq(1));
    assert_that!(session.trade_link(), some(eq("https://x")));
    assert_that!(participation.active, eq(true));
}

#[tokio::test]
async fn given_cleared_link_when_loaded_offline_then_absent() {
    // Given
    let (mut session, _) = offline_session();
    session.set_trade_link("https://x");

    // When
    session.clear_trade_link();
    let loaded = session.load_trade_link().await;

    // Then
    assert_that!(loaded, none());
}

#[tokio::test]
async fn given_local_link_when_loaded_then_backend_not_asked() {
    let (mut session, gateway) = session_with(ScriptedGateway {
        trade_link: Some(Some("https://remote".into())),
        ..ScriptedGateway::default()
    });
    session.set_trade_link("https://local");

    let loaded = session.load_trade_link().await;

    assert_that!(loaded, some(eq("https://local")));
    assert_that!(gateway.trade_link_fetches(), eq(0));
}

#[tokio::test]
async fn given_no_local_link_when_loaded_then_remote_adopted() {
    let (mut session, gateway) = session_with(ScriptedGateway {
        trade_link: Some(Some("https://remote".into())),
        ..ScriptedGateway::default()
    });

    let loaded = session.load_trade_link().await;

    assert_that!(loaded, some(eq("https://remote")));
    assert_that!(session.trade_link(), some(eq("https://remote")));
    assert_that!(gateway.trade_link_fetches(), eq(1));
}

#[tokio::test]
async fn given_backend_failure_when_loaded_then_absent() {
    let (mut session, _) = session_with(ScriptedGateway::default());

    assert_that!(session.load_trade_link().await, none());
}

#[tokio::test]
async fn given_local_edit_after_ticket_when_remote_applied_then_discarded() {
    // Given: a fetch started while the local slot was empty
    let (mut session, _) = offline_session();
    let ticket = session.sync_ticket();

    // When: the user sets and clears the link before the response lands
    session.set_trade_link("https://new");
    session.clear_trade_link();
    let applied = session.apply_remote_trade_link(ticket, Some("https://stale".into()));

    // Then
    assert_that!(applied, eq(false));
    assert_that!(session.trade_link(), none());
}

#[tokio::test]
async fn given_current_ticket_and_local_link_when_remote_applied_then_local_kept() {
    let (mut session, _) = offline_session();
    session.set_trade_link("https://local");
    let ticket = session.sync_ticket();

    let applied = session.apply_remote_trade_link(ticket, Some("https://remote".into()));

    assert_that!(applied, eq(false));
    assert_that!(session.trade_link(), some(eq("https://local")));
}

#[tokio::test]
async fn given_current_ticket_and_empty_cache_when_remote_applied_then_adopted() {
    let (mut session, _) = offline_session();
    let ticket = session.sync_ticket();

    assert_that!(
        session.apply_remote_trade_link(ticket, Some("https://remote".into())),
        eq(true)
    );
    assert_that!(
        session.apply_remote_trade_link(ticket, Some("   ".into())),
        eq(false)
    );
    assert_that!(session.trade_link(), some(eq("https://remote")));
}

// =============================================================================
// Followed streamers
// =============================================================================

#[tokio::test]
async fn given_remote_list_when_loaded_then_remote_first_and_local_deduplicated() {
    // Given
    let (mut session, gateway) = session_with(ScriptedGateway {
        following: Some(vec![
            remote_entry(Platform::Twitch, "xqc", 100),
            remote_entry(Platform::Kick, "bob", 10),
        ]),
        ..ScriptedGateway::default()
    });
    session.ingest_callback(&AuthCallback::from_query(
        "kick_user=bob&twitch_user=alice&user_id=9",
    ));

    // When
    let followed = session.followed_streamers().await;

    // Then
    let logins: Vec<&str> = followed.iter().map(|e| e.login.as_str()).collect();
    assert_that!(logins, eq(&vec!["xqc", "bob", "alice"]));
    assert_that!(followed[1].followers, eq(10));
    assert_that!(
        gateway.following_user_ids.lock().unwrap().clone(),
        eq(&vec![Some("9".to_string())])
    );
}

#[tokio::test]
async fn given_backend_down_and_nothing_connected_when_loaded_then_empty() {
    let (session, _) = offline_session();

    assert_that!(session.followed_streamers().await, is_empty());
}

#[tokio::test]
async fn given_rate_limited_sync_when_requested_then_none() {
    let (session, _) = offline_session();

    assert_that!(session.request_following_sync().await, none());
}

// =============================================================================
// Dispatch / refresh / preferences
// =============================================================================

#[tokio::test]
async fn given_command_sequence_when_dispatched_then_each_returns_current_state() {
    let (mut session, _) = offline_session();

    let after_connect = session.dispatch(ProfileCommand::Connect {
        platform: Platform::Twitch,
        record: IdentityRecord::new("alice"),
    });
    let after_link = session.dispatch(ProfileCommand::SetTradeLink {
        value: "https://x".into(),
    });
    let after_clear = session.dispatch(ProfileCommand::ClearTradeLink);
    let after_disconnect = session.dispatch(ProfileCommand::Disconnect {
        platform: Platform::Twitch,
    });

    assert_that!(after_connect.active, eq(false));
    assert_that!(after_link.active, eq(true));
    assert_that!(after_clear.active, eq(false));
    assert_that!(after_disconnect.has_social, eq(false));
}

#[tokio::test]
async fn given_callback_command_when_dispatched_then_identities_stored() {
    let (mut session, _) = offline_session();
    let callback = AuthCallback::from_query("kick_user=bob&kick_avatar=https%3A%2F%2Fa.png");

    let participation = session.dispatch(ProfileCommand::IngestCallback(callback));

    assert_that!(participation.has_social, eq(true));
    assert_that!(
        session.local_fallback()[0].avatar.as_deref(),
        some(eq("https://a.png"))
    );
}

#[tokio::test]
async fn given_connected_profile_when_refreshed_then_snapshot_complete() {
    // Given
    let (mut session, _) = session_with(ScriptedGateway {
        trade_link: Some(Some("https://remote".into())),
        following: Some(vec![remote_entry(Platform::Kick, "trainwreck", 5)]),
        ..ScriptedGateway::default()
    });
    session.ingest_callback(&AuthCallback::from_query("twitch_user=alice&user_id=3"));

    // When
    let snapshot = session.refresh().await;

    // Then
    assert_that!(snapshot.trade_link, some(eq("https://remote")));
    assert_that!(snapshot.participation.active, eq(true));
    assert_that!(snapshot.followed.len(), eq(2));
    assert_that!(snapshot.user_id, some(eq("3")));
    assert_that!(snapshot.kick, none());
}

#[tokio::test]
async fn given_preferences_changed_when_read_then_persisted_values() {
    let (mut session, _) = offline_session();

    session.set_locale(Locale::En);
    session.set_notify(NotifyPref::On);
    let prefs = session.toggle_theme();

    assert_that!(prefs.locale, eq(Locale::En));
    assert_that!(prefs.theme, eq(Theme::Light));
    assert_that!(prefs.notify, eq(NotifyPref::On));
    assert_that!(session.toggle_theme().theme, eq(Theme::Dark));
}

#[tokio::test]
async fn given_backend_never_answers_when_trade_link_set_then_state_derived_immediately() {
    // Given
    let (mut session, _) = session_with(ScriptedGateway {
        hang_saves: true,
        ..ScriptedGateway::default()
    });
    session.connect(Platform::Kick, IdentityRecord::new("bob"));

    // When
    let participation = session.set_trade_link("https://x");

    // Then: local state is settled while the POST is still outstanding
    assert_that!(participation.active, eq(true));
    assert_that!(session.trade_link(), some(eq("https://x")));
    assert_that!(session.participation().active, eq(true));
    let flushed =
        tokio::time::timeout(std::time::Duration::from_millis(50), session.flush_mirror()).await;
    assert_that!(flushed.is_err(), eq(true));
}

#[tokio::test]
async fn given_set_then_clear_when_flushed_then_backend_sees_edits_in_order() {
    let (mut session, gateway) = session_with(ScriptedGateway::default());

    session.set_trade_link("https://a");
    session.set_trade_link("https://b");
    session.clear_trade_link();
    session.flush_mirror().await;

    let links: Vec<String> = gateway.saved().into_iter().map(|(_, link)| link).collect();
    assert_that!(
        links,
        eq(&vec!["https://a".to_string(), "https://b".to_string(), String::new()])
    );
}
