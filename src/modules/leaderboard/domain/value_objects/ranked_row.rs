use serde::{Deserialize, Serialize};

/// One display-ready leaderboard row. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRow {
    pub anime: String,
    pub director: String,
    pub genre: String,
    /// Computed rating, single decimal place.
    pub rating: f64,
    /// 1-based; rows with equal ratings share a rank.
    pub rank: u32,
    /// Vote count with thousands separators.
    pub votes: String,
}
