//! Domain core for the Otaku Sphere anime catalog and watchlist.
//!
//! The crate is organized by bounded context under [`modules`]:
//! - `catalog`: anime catalog entries, browse queries, and the repository
//!   seam behind which persistent storage lives.
//! - `watchlist`: the three-board watch-status store driven by drag-and-drop
//!   events, with optimistic local updates and best-effort remote persistence.
//! - `leaderboard`: tie-aware rank computation over rating-sorted entries and
//!   infinite-scroll page accumulation.
//!
//! Cross-cutting concerns (errors, config, logging, validation, formatting)
//! live under [`shared`].

pub mod modules;
pub mod shared;

pub use modules::catalog::{
    BrowseQuery, CatalogDataset, CatalogEntry, CatalogRepository, CatalogService, EntryDraft,
    InMemoryCatalog, SortField,
};
pub use modules::leaderboard::{LeaderboardService, RankedRow};
pub use modules::watchlist::{
    Board, BoardItem, DragPayload, Notifier, RemoteError, Severity, WatchCategory,
    WatchlistBoardStore, WatchlistRemote, WatchlistService,
};
pub use shared::errors::{AppError, AppResult};
