use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::super::value_objects::watch_category::WatchCategory;

/// A tracked anime on one of the watchlist boards. The id is shared with the
/// underlying catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardItem {
    pub anime_id: Uuid,
    pub name: String,
    pub category: WatchCategory,
}

/// A single category-scoped ordered list of board items. Newest additions
/// sit at the front, matching the order the boards render in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    category: WatchCategory,
    items: Vec<BoardItem>,
}

impl Board {
    pub fn new(category: WatchCategory) -> Self {
        Self {
            category,
            items: Vec::new(),
        }
    }

    pub fn category(&self) -> WatchCategory {
        self.category
    }

    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    pub fn contains(&self, anime_id: &Uuid) -> bool {
        self.items.iter().any(|item| &item.anime_id == anime_id)
    }

    /// Prepends an item, retagging it with this board's category.
    pub fn prepend(&mut self, mut item: BoardItem) {
        item.category = self.category;
        self.items.insert(0, item);
    }

    /// Removes the item with the given id if present. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, anime_id: &Uuid) -> bool {
        let original_len = self.items.len();
        self.items.retain(|item| &item.anime_id != anime_id);
        self.items.len() < original_len
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> BoardItem {
        BoardItem {
            anime_id: Uuid::new_v4(),
            name: name.to_string(),
            category: WatchCategory::Pending,
        }
    }

    #[test]
    fn prepend_puts_newest_first_and_retags() {
        let mut board = Board::new(WatchCategory::Watching);
        board.prepend(item("Monster"));
        board.prepend(item("Mushishi"));

        assert_eq!(board.items()[0].name, "Mushishi");
        assert_eq!(board.items()[1].name, "Monster");
        assert!(board
            .items()
            .iter()
            .all(|item| item.category == WatchCategory::Watching));
    }

    #[test]
    fn remove_is_a_no_op_for_absent_ids() {
        let mut board = Board::new(WatchCategory::Pending);
        let kept = item("Monster");
        let kept_id = kept.anime_id;
        board.prepend(kept);

        assert!(!board.remove(&Uuid::new_v4()));
        assert_eq!(board.len(), 1);
        assert!(board.remove(&kept_id));
        assert!(board.is_empty());
    }
}
