use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::watch_category::WatchCategory;
use crate::shared::errors::{AppError, AppResult};

/// Typed drag-and-drop payload carried by a board item while it is being
/// dragged: the item's identifier, display name, and the board it currently
/// sits on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub anime_id: Uuid,
    pub name: String,
    pub category: WatchCategory,
}

impl DragPayload {
    pub fn new(anime_id: Uuid, name: impl Into<String>, category: WatchCategory) -> Self {
        Self {
            anime_id,
            name: name.into(),
            category,
        }
    }

    /// Boundary check before the payload reaches the board store.
    pub fn validate(&self) -> AppResult<()> {
        if self.anime_id.is_nil() {
            return Err(AppError::InvalidInput(
                "Drag payload is missing an anime id".to_string(),
            ));
        }
        crate::shared::utils::Validator::validate_anime_name(&self.name)?;
        Ok(())
    }
}
