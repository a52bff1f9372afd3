use uuid::Uuid;

use super::board::{Board, BoardItem};
use super::super::value_objects::watch_category::WatchCategory;
use crate::modules::catalog::domain::repositories::catalog_dataset::CatalogDataset;
use crate::{log_debug, log_warn};

/// In-memory membership of tracked anime across the three watch-status
/// boards.
///
/// Explicitly constructed and owned by whoever drives it; there is no
/// ambient instance. Invariant: an anime id appears on at most one board at
/// any time. Callers are expected to pair removals with additions, and
/// `add_item` additionally evicts stale entries from other boards so the
/// invariant holds even for unpaired calls.
#[derive(Debug, Clone)]
pub struct WatchlistBoardStore {
    pending: Board,
    watching: Board,
    finished: Board,
}

impl WatchlistBoardStore {
    pub fn new() -> Self {
        Self {
            pending: Board::new(WatchCategory::Pending),
            watching: Board::new(WatchCategory::Watching),
            finished: Board::new(WatchCategory::Finished),
        }
    }

    pub fn board(&self, category: WatchCategory) -> &Board {
        match category {
            WatchCategory::Pending => &self.pending,
            WatchCategory::Watching => &self.watching,
            WatchCategory::Finished => &self.finished,
        }
    }

    fn board_mut(&mut self, category: WatchCategory) -> &mut Board {
        match category {
            WatchCategory::Pending => &mut self.pending,
            WatchCategory::Watching => &mut self.watching,
            WatchCategory::Finished => &mut self.finished,
        }
    }

    pub fn items(&self, category: WatchCategory) -> &[BoardItem] {
        self.board(category).items()
    }

    /// Board currently holding the given anime, if any.
    pub fn category_of(&self, anime_id: &Uuid) -> Option<WatchCategory> {
        WatchCategory::ALL
            .into_iter()
            .find(|category| self.board(*category).contains(anime_id))
    }

    pub fn contains(&self, anime_id: &Uuid) -> bool {
        self.category_of(anime_id).is_some()
    }

    /// Resolves the id against the catalog dataset and prepends the item to
    /// the target board. Unknown ids are declined silently; returns whether
    /// the board changed.
    pub fn add_item(
        &mut self,
        catalog: &dyn CatalogDataset,
        anime_id: Uuid,
        target: WatchCategory,
    ) -> bool {
        let Some(entry) = catalog.find(&anime_id) else {
            log_debug!("Declining add of unknown anime {}", anime_id);
            return false;
        };

        // Exclusivity: evict the id from whichever board still holds it.
        for category in WatchCategory::ALL {
            if category != target && self.board_mut(category).remove(&anime_id) {
                log_warn!(
                    "Anime {} was still on the {} board, evicting before add",
                    anime_id,
                    category
                );
            }
        }

        if self.board(target).contains(&anime_id) {
            return false;
        }

        self.board_mut(target).prepend(BoardItem {
            anime_id,
            name: entry.name,
            category: target,
        });
        true
    }

    /// Removes the item from the named board only. No-op when absent.
    pub fn remove_item(&mut self, category: WatchCategory, anime_id: &Uuid) -> bool {
        self.board_mut(category).remove(anime_id)
    }

    /// Remove-then-add across two boards. The removal from the source board
    /// is performed first so the item is never on two boards at once.
    pub fn move_item(
        &mut self,
        catalog: &dyn CatalogDataset,
        anime_id: Uuid,
        from: WatchCategory,
        to: WatchCategory,
    ) -> bool {
        if from == to {
            return false;
        }
        self.remove_item(from, &anime_id);
        self.add_item(catalog, anime_id, to)
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.watching.len() + self.finished.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.watching.clear();
        self.finished.clear();
    }
}

impl Default for WatchlistBoardStore {
    fn default() -> Self {
        Self::new()
    }
}
