use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use super::super::domain::{
    entities::board::BoardItem,
    entities::board_store::WatchlistBoardStore,
    notifier::{Notifier, Severity},
    repositories::watchlist_remote::{RemoteError, WatchlistRemote},
    value_objects::drag_payload::DragPayload,
    value_objects::watch_category::WatchCategory,
};
use crate::modules::catalog::domain::repositories::catalog_dataset::CatalogDataset;
use crate::shared::errors::AppResult;
use crate::{log_debug, log_error};

/// Drives the watchlist board store from drag-and-drop events.
///
/// Local mutations are synchronous and applied optimistically; the matching
/// remote persistence call is spawned afterwards and its outcome only feeds
/// the notification surface. Local state is not rolled back on remote
/// failure.
pub struct WatchlistService {
    store: Mutex<WatchlistBoardStore>,
    catalog: Arc<dyn CatalogDataset>,
    remote: Arc<dyn WatchlistRemote>,
    notifier: Arc<dyn Notifier>,
}

impl WatchlistService {
    pub fn new(
        store: WatchlistBoardStore,
        catalog: Arc<dyn CatalogDataset>,
        remote: Arc<dyn WatchlistRemote>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store: Mutex::new(store),
            catalog,
            remote,
            notifier,
        }
    }

    fn store(&self) -> MutexGuard<'_, WatchlistBoardStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds the anime to the target board, confirming with a toast. Unknown
    /// ids are declined silently.
    pub fn add_item(&self, anime_id: Uuid, target: WatchCategory) -> bool {
        let added = self
            .store()
            .add_item(self.catalog.as_ref(), anime_id, target);
        if added {
            self.notifier.notify(target.added_message(), Severity::Info);
        }
        added
    }

    /// Removes the anime from the named board only.
    pub fn remove_item(&self, category: WatchCategory, anime_id: &Uuid) -> bool {
        self.store().remove_item(category, anime_id)
    }

    /// Remove-from-source then add-to-target, with the usual confirmation
    /// toast when the add lands.
    pub fn move_item(&self, anime_id: Uuid, from: WatchCategory, to: WatchCategory) -> bool {
        let moved = self
            .store()
            .move_item(self.catalog.as_ref(), anime_id, from, to);
        if moved {
            self.notifier.notify(to.added_message(), Severity::Info);
        }
        moved
    }

    /// Handles a drop of `payload` onto the `target` board.
    ///
    /// A drop back onto the item's current board is a no-op. Otherwise the
    /// local move is applied immediately and the status change is pushed to
    /// the remote endpoint in a detached task; completion order relative to
    /// later drops is unspecified. Must be called from within a tokio
    /// runtime.
    pub fn handle_drop(&self, payload: DragPayload, target: WatchCategory) -> AppResult<()> {
        payload.validate()?;

        if payload.category == target {
            log_debug!(
                "Ignoring drop of {} back onto the {} board",
                payload.anime_id,
                target
            );
            return Ok(());
        }

        // Optimistic local update; not reverted if the remote call fails.
        self.move_item(payload.anime_id, payload.category, target);

        // The detached task only needs the remote and notifier handles.
        let remote = Arc::clone(&self.remote);
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            push_status_change(
                remote.as_ref(),
                notifier.as_ref(),
                payload.anime_id,
                payload.category,
                target,
            )
            .await;
        });

        Ok(())
    }

    /// Pushes one status change to the remote endpoint and routes failures
    /// to the notification surface. [`Self::handle_drop`] spawns this work
    /// detached; callers that need to observe completion can await it here.
    pub async fn push_status_change(
        &self,
        anime_id: Uuid,
        from: WatchCategory,
        to: WatchCategory,
    ) {
        push_status_change(
            self.remote.as_ref(),
            self.notifier.as_ref(),
            anime_id,
            from,
            to,
        )
        .await;
    }

    /// Snapshot of the named board's items, newest first.
    pub fn items(&self, category: WatchCategory) -> Vec<BoardItem> {
        self.store().items(category).to_vec()
    }

    /// Board currently holding the given anime, if any.
    pub fn category_of(&self, anime_id: &Uuid) -> Option<WatchCategory> {
        self.store().category_of(anime_id)
    }

    /// Clears every board. Intended for sign-out and tests.
    pub fn reset(&self) {
        self.store().reset();
    }
}

async fn push_status_change(
    remote: &dyn WatchlistRemote,
    notifier: &dyn Notifier,
    anime_id: Uuid,
    from: WatchCategory,
    to: WatchCategory,
) {
    match remote.update_status(anime_id, from, to).await {
        Ok(()) => log_debug!("Persisted status change for {}: {} -> {}", anime_id, from, to),
        Err(RemoteError::Unauthorized) => notifier.prompt_sign_in(),
        Err(RemoteError::NotFound) => {
            notifier.notify("Anime not found in the watchlist.", Severity::Info)
        }
        Err(RemoteError::Other(reason)) => {
            log_error!(
                "Failed to persist status change for {}: {}",
                anime_id,
                reason
            );
            notifier.notify("Something went wrong. Please try again.", Severity::Error);
        }
    }
}
