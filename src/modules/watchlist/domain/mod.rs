pub mod entities;
pub mod notifier;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::board::{Board, BoardItem};
pub use entities::board_store::WatchlistBoardStore;
pub use notifier::{Notifier, Severity};
pub use repositories::watchlist_remote::{RemoteError, WatchlistRemote};
pub use value_objects::drag_payload::DragPayload;
pub use value_objects::watch_category::WatchCategory;
