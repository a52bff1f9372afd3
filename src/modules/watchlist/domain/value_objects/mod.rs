pub mod drag_payload;
pub mod watch_category;

pub use drag_payload::DragPayload;
pub use watch_category::WatchCategory;
