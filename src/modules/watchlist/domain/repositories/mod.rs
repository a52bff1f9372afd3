pub mod watchlist_remote;

pub use watchlist_remote::{RemoteError, WatchlistRemote};
