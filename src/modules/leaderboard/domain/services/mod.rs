pub mod rank_calculator;

pub use rank_calculator::{compute_rankings, computed_rating, entry_hrefs};
