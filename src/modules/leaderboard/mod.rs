pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::service::LeaderboardService;
pub use domain::services::rank_calculator::{compute_rankings, computed_rating, entry_hrefs};
pub use domain::value_objects::ranked_row::RankedRow;
