pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::service::WatchlistService;
pub use domain::{
    Board, BoardItem, DragPayload, Notifier, RemoteError, Severity, WatchCategory,
    WatchlistBoardStore, WatchlistRemote,
};
