pub mod service;

pub use service::WatchlistService;
