/// Drag-and-drop watchlist flows: optimistic local moves, silent declines,
/// and the mapping of remote failures onto the notification surface.
#[allow(dead_code)]
mod utils;

use std::sync::Arc;
use uuid::Uuid;

use otaku_sphere::{
    DragPayload, InMemoryCatalog, RemoteError, Severity, WatchCategory, WatchlistBoardStore,
    WatchlistService,
};
use utils::factories::rated_entry;
use utils::mocks::{MockRemote, RecordingNotifier};

struct TestBed {
    service: Arc<WatchlistService>,
    notifier: Arc<RecordingNotifier>,
    ids: Vec<Uuid>,
}

fn build_service(names: &[&str], remote: MockRemote) -> TestBed {
    let entries: Vec<_> = names.iter().map(|name| rated_entry(name, 80, 10)).collect();
    let ids = entries.iter().map(|entry| entry.id).collect();
    let catalog = Arc::new(InMemoryCatalog::with_entries(entries));
    let notifier = Arc::new(RecordingNotifier::new());

    let service = Arc::new(WatchlistService::new(
        WatchlistBoardStore::new(),
        catalog,
        Arc::new(remote),
        notifier.clone(),
    ));

    TestBed {
        service,
        notifier,
        ids,
    }
}

fn accepting_remote() -> MockRemote {
    let mut remote = MockRemote::new();
    remote.expect_update_status().returning(|_, _, _| Ok(()));
    remote
}

#[tokio::test]
async fn drop_applies_the_local_move_before_remote_confirmation() {
    let bed = build_service(&["Monster"], accepting_remote());
    let id = bed.ids[0];
    bed.service.add_item(id, WatchCategory::Pending);

    let payload = DragPayload::new(id, "Monster", WatchCategory::Pending);
    bed.service
        .handle_drop(payload, WatchCategory::Watching)
        .unwrap();

    // Membership flipped immediately, without waiting on the remote call.
    assert_eq!(bed.service.category_of(&id), Some(WatchCategory::Watching));
    assert!(bed
        .service
        .items(WatchCategory::Pending)
        .iter()
        .all(|item| item.anime_id != id));

    let messages = bed.notifier.messages();
    assert_eq!(
        messages.last().unwrap().0,
        "Added to ongoing animes",
        "drop should confirm with the destination board's toast"
    );
}

#[tokio::test]
async fn same_board_drop_does_not_duplicate_the_item() {
    let bed = build_service(&["Monster"], accepting_remote());
    let id = bed.ids[0];
    bed.service.add_item(id, WatchCategory::Watching);

    let payload = DragPayload::new(id, "Monster", WatchCategory::Watching);
    bed.service
        .handle_drop(payload, WatchCategory::Watching)
        .unwrap();

    assert_eq!(bed.service.items(WatchCategory::Watching).len(), 1);
}

#[tokio::test]
async fn unknown_id_is_declined_silently() {
    let bed = build_service(&["Monster"], accepting_remote());

    assert!(!bed.service.add_item(Uuid::new_v4(), WatchCategory::Pending));
    for category in WatchCategory::ALL {
        assert!(bed.service.items(category).is_empty());
    }
    assert!(bed.notifier.messages().is_empty());
}

#[tokio::test]
async fn move_with_stale_source_board_still_lands_once() {
    // Caller claims the item comes from `pending` while it actually sits on
    // `finished`: the pending removal is a no-op, the watching add succeeds,
    // and the stale finished entry is evicted.
    let bed = build_service(&["Monster"], accepting_remote());
    let id = bed.ids[0];
    bed.service.add_item(id, WatchCategory::Finished);

    bed.service
        .move_item(id, WatchCategory::Pending, WatchCategory::Watching);

    assert_eq!(bed.service.category_of(&id), Some(WatchCategory::Watching));
    assert!(bed.service.items(WatchCategory::Finished).is_empty());
    assert_eq!(bed.service.items(WatchCategory::Watching).len(), 1);
}

#[tokio::test]
async fn invalid_payload_is_rejected_at_the_boundary() {
    let bed = build_service(&["Monster"], accepting_remote());
    let payload = DragPayload::new(Uuid::nil(), "Monster", WatchCategory::Pending);

    assert!(bed
        .service
        .handle_drop(payload, WatchCategory::Watching)
        .is_err());
    assert!(bed.service.items(WatchCategory::Watching).is_empty());
}

#[tokio::test]
async fn unauthorized_remote_failure_prompts_sign_in() {
    let mut remote = MockRemote::new();
    remote
        .expect_update_status()
        .returning(|_, _, _| Err(RemoteError::Unauthorized));
    let bed = build_service(&["Monster"], remote);
    let id = bed.ids[0];
    bed.service.add_item(id, WatchCategory::Watching);

    bed.service
        .push_status_change(id, WatchCategory::Pending, WatchCategory::Watching)
        .await;

    assert_eq!(bed.notifier.sign_in_prompts(), 1);
    // Optimistic state stays as-is; no rollback.
    assert_eq!(bed.service.category_of(&id), Some(WatchCategory::Watching));
}

#[tokio::test]
async fn missing_remote_entry_reports_an_informational_toast() {
    let mut remote = MockRemote::new();
    remote
        .expect_update_status()
        .returning(|_, _, _| Err(RemoteError::NotFound));
    let bed = build_service(&["Monster"], remote);
    let id = bed.ids[0];

    bed.service
        .push_status_change(id, WatchCategory::Pending, WatchCategory::Watching)
        .await;

    let messages = bed.notifier.messages();
    assert_eq!(
        messages.last().unwrap(),
        &(
            "Anime not found in the watchlist.".to_string(),
            Severity::Info
        )
    );
}

#[tokio::test]
async fn other_remote_failures_surface_a_generic_error() {
    let mut remote = MockRemote::new();
    remote
        .expect_update_status()
        .returning(|_, _, _| Err(RemoteError::Other("boom".to_string())));
    let bed = build_service(&["Monster"], remote);
    let id = bed.ids[0];

    bed.service
        .push_status_change(id, WatchCategory::Pending, WatchCategory::Watching)
        .await;

    let messages = bed.notifier.messages();
    assert_eq!(messages.last().unwrap().1, Severity::Error);
}

#[tokio::test]
async fn reset_empties_every_board() {
    let bed = build_service(&["Monster", "Mushishi"], accepting_remote());
    bed.service.add_item(bed.ids[0], WatchCategory::Pending);
    bed.service.add_item(bed.ids[1], WatchCategory::Finished);

    bed.service.reset();
    for category in WatchCategory::ALL {
        assert!(bed.service.items(category).is_empty());
    }
}
