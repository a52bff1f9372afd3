use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::super::value_objects::watch_category::WatchCategory;

/// Failures surfaced by the remote watchlist endpoint.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("anime not found in the watchlist")]
    NotFound,

    #[error("{0}")]
    Other(String),
}

/// Remote persistence seam for watch-status changes. The transport (and its
/// timeouts) live behind this trait.
#[async_trait]
pub trait WatchlistRemote: Send + Sync {
    async fn update_status(
        &self,
        anime_id: Uuid,
        from: WatchCategory,
        to: WatchCategory,
    ) -> Result<(), RemoteError>;
}
