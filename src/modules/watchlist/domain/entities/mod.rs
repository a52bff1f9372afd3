pub mod board;
pub mod board_store;

pub use board::{Board, BoardItem};
pub use board_store::WatchlistBoardStore;
