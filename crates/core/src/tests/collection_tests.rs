// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::fakes::{FakeCatalog, ScriptedPrompt, admin_user, channel, descriptor, record};
use crate::collection::{COLLECTION_PAGE_SIZE, CollectionController};
use kiosk_domain::{ActiveConnection, ConnectionStatus, RemoteError};
use kiosk_session::SessionChannel;
use std::sync::Arc;

fn confirmed_channel(id: i64, local_code: Option<&str>) -> Arc<SessionChannel> {
    let ch = channel();
    ch.publish_connection(&ActiveConnection::confirmed(&descriptor(
        id, "Centro", local_code,
    )));
    ch
}

#[tokio::test]
async fn test_load_requires_confirmed_connection() {
    let api = FakeCatalog::serving(vec![record("1", "", true)]);
    let mut controller = CollectionController::new(channel());

    controller.load(&api).await.unwrap();

    assert!(api.fetches.lock().unwrap().is_empty());
    assert!(controller.message().is_some());
}

#[tokio::test]
async fn test_load_replaces_snapshot_and_resets_view() {
    let api = FakeCatalog::serving(vec![record("1", "", true), record("2", "", false)]);
    let mut controller = CollectionController::new(confirmed_channel(5, None));
    controller.set_search("stale");

    controller.load(&api).await.unwrap();

    assert_eq!(*api.fetches.lock().unwrap(), vec![5]);
    assert_eq!(controller.filtered().len(), 2);
    assert!(controller.search().is_empty());
    assert_eq!(controller.page(), 1);
}

#[tokio::test]
async fn test_load_failure_clears_snapshot() {
    let api = FakeCatalog::serving(vec![record("1", "", true)]);
    let mut controller = CollectionController::new(confirmed_channel(5, None));
    controller.load(&api).await.unwrap();

    *api.records.lock().unwrap() = Err(RemoteError::Remote {
        status: 500,
        body: String::from("boom"),
    });
    controller.load(&api).await.unwrap();

    assert!(controller.filtered().is_empty());
    assert_eq!(controller.message(), Some("boom"));
}

#[tokio::test]
async fn test_connection_reset_discards_snapshot() {
    let ch = confirmed_channel(5, None);
    let api = FakeCatalog::serving(vec![record("1", "", true)]);
    let mut controller = CollectionController::new(Arc::clone(&ch));
    controller.load(&api).await.unwrap();
    controller.set_search("1");

    ch.reset_connection(ConnectionStatus::Pending);
    controller.sync();

    assert!(controller.filtered().is_empty());
    assert!(controller.search().is_empty());
    assert_eq!(controller.page(), 1);
    assert!(controller.message().is_some());
    // No auto-load happened on the state change.
    assert_eq!(api.fetches.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_session_cleared_event_discards_snapshot() {
    let ch = confirmed_channel(5, None);
    let api = FakeCatalog::serving(vec![record("1", "", true)]);
    let mut controller = CollectionController::new(Arc::clone(&ch));
    controller.load(&api).await.unwrap();
    let mut events = ch.subscribe();

    ch.clear_session();
    let event = events.recv().await.unwrap();
    controller.on_event(&event);

    assert!(controller.filtered().is_empty());
    assert!(controller.message().is_some());
    // No auto-load on teardown either.
    assert_eq!(api.fetches.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_connection_changed_event_resyncs_the_view() {
    let ch = confirmed_channel(5, None);
    let api = FakeCatalog::serving(vec![record("1", "", true)]);
    let mut controller = CollectionController::new(Arc::clone(&ch));
    controller.load(&api).await.unwrap();
    let mut events = ch.subscribe();

    ch.reset_connection(ConnectionStatus::Pending);
    let event = events.recv().await.unwrap();
    controller.on_event(&event);

    assert!(controller.filtered().is_empty());
    assert_eq!(controller.page(), 1);
}

#[tokio::test]
async fn test_credentials_event_leaves_snapshot_alone() {
    let ch = confirmed_channel(5, None);
    let api = FakeCatalog::serving(vec![record("1", "", true)]);
    let mut controller = CollectionController::new(Arc::clone(&ch));
    controller.load(&api).await.unwrap();
    let mut events = ch.subscribe();

    ch.store_credentials("tok", &admin_user());
    let event = events.recv().await.unwrap();
    controller.on_event(&event);

    assert_eq!(controller.filtered().len(), 1);
}

#[tokio::test]
async fn test_sync_is_idempotent() {
    let ch = confirmed_channel(5, None);
    let api = FakeCatalog::serving(vec![record("1", "", true)]);
    let mut controller = CollectionController::new(Arc::clone(&ch));
    controller.load(&api).await.unwrap();

    // Same state read twice: the snapshot survives.
    controller.sync();
    controller.sync();

    assert_eq!(controller.filtered().len(), 1);
}

#[tokio::test]
async fn test_search_matches_code_and_annotation() {
    let api = FakeCatalog::serving(vec![
        record("100", "sprite grande", true),
        record("200", "cola", true),
        record("307", "", false),
    ]);
    let mut controller = CollectionController::new(confirmed_channel(5, None));
    controller.load(&api).await.unwrap();

    controller.set_search("SPRITE");
    assert_eq!(controller.filtered().len(), 1);

    controller.set_search("30");
    assert_eq!(controller.filtered().len(), 1);

    controller.set_search("");
    assert_eq!(controller.filtered().len(), 3);
}

#[tokio::test]
async fn test_pagination_rejects_out_of_range() {
    let records = (1..=45).map(|i| record(&i.to_string(), "", true)).collect();
    let api = FakeCatalog::serving(records);
    let mut controller = CollectionController::new(confirmed_channel(5, None));
    controller.load(&api).await.unwrap();

    assert_eq!(controller.page_count(), 3);
    assert_eq!(controller.current_page().len(), COLLECTION_PAGE_SIZE);

    assert!(controller.set_page(3));
    assert_eq!(controller.current_page().len(), 5);

    assert!(!controller.set_page(4));
    assert!(!controller.set_page(0));
    assert_eq!(controller.page(), 3);
}

#[tokio::test]
async fn test_search_resets_page() {
    let records = (1..=45).map(|i| record(&i.to_string(), "", true)).collect();
    let api = FakeCatalog::serving(records);
    let mut controller = CollectionController::new(confirmed_channel(5, None));
    controller.load(&api).await.unwrap();
    controller.set_page(3);

    controller.set_search("4");

    assert_eq!(controller.page(), 1);
}

#[tokio::test]
async fn test_declined_toggle_is_a_no_op() {
    let api = FakeCatalog::serving(vec![record("7", "", true)]);
    let mut controller = CollectionController::new(confirmed_channel(5, None));
    controller.load(&api).await.unwrap();
    let mut prompt = ScriptedPrompt::answering(false);

    controller
        .toggle_visibility(&api, &mut prompt, "7")
        .await
        .unwrap();

    assert_eq!(prompt.asked, 1);
    assert!(api.toggles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_confirmed_toggle_carries_identity_and_reloads() {
    let ch = confirmed_channel(5, Some("4"));
    ch.store_credentials("tok", &admin_user());
    let api = FakeCatalog::serving(vec![record("7", "", true)]);
    let mut controller = CollectionController::new(Arc::clone(&ch));
    controller.load(&api).await.unwrap();
    let mut prompt = ScriptedPrompt::answering(true);

    controller
        .toggle_visibility(&api, &mut prompt, "7")
        .await
        .unwrap();

    let toggles = api.toggles.lock().unwrap();
    assert_eq!(toggles.len(), 1);
    assert_eq!(toggles[0].connection_id, 5);
    assert_eq!(toggles[0].code, "7");
    assert_eq!(toggles[0].username, "Ana Martin");
    assert_eq!(toggles[0].cod_local.as_deref(), Some("4"));
    // The initial load plus the post-toggle reload.
    assert_eq!(api.fetches.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_toggle_failure_keeps_snapshot() {
    let api = FakeCatalog::serving(vec![record("7", "", true)]);
    *api.toggle.lock().unwrap() = Err(RemoteError::Rejected {
        message: String::from("record is locked"),
    });
    let mut controller = CollectionController::new(confirmed_channel(5, None));
    controller.load(&api).await.unwrap();
    let mut prompt = ScriptedPrompt::answering(true);

    controller
        .toggle_visibility(&api, &mut prompt, "7")
        .await
        .unwrap();

    assert_eq!(controller.filtered().len(), 1);
    assert_eq!(controller.message(), Some("record is locked"));
    assert_eq!(api.fetches.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unauthorized_load_propagates() {
    let api = FakeCatalog::failing(RemoteError::Unauthorized);
    let mut controller = CollectionController::new(confirmed_channel(5, None));

    assert_eq!(controller.load(&api).await, Err(RemoteError::Unauthorized));
}
