use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Watch-status category. Every board item belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchCategory {
    Pending,
    Watching,
    Finished,
}

impl WatchCategory {
    pub const ALL: [WatchCategory; 3] = [
        WatchCategory::Pending,
        WatchCategory::Watching,
        WatchCategory::Finished,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchCategory::Pending => "pending",
            WatchCategory::Watching => "watching",
            WatchCategory::Finished => "finished",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WatchCategory::Pending => "Not Started",
            WatchCategory::Watching => "Currently Watching",
            WatchCategory::Finished => "Finished Watching",
        }
    }

    /// Toast copy shown after an item lands on this board.
    pub fn added_message(&self) -> &'static str {
        match self {
            WatchCategory::Pending => "Added to not started animes",
            WatchCategory::Watching => "Added to ongoing animes",
            WatchCategory::Finished => "Added to finished animes",
        }
    }
}

impl fmt::Display for WatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WatchCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(WatchCategory::Pending),
            "watching" => Ok(WatchCategory::Watching),
            "finished" => Ok(WatchCategory::Finished),
            other => Err(AppError::InvalidInput(format!(
                "Unknown watch category: {}",
                other
            ))),
        }
    }
}
