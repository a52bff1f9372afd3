use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::utils::formatting::format_url;

/// A persisted anime record with its rating aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub director: String,
    pub genre: String,
    pub release_year: i32,
    /// Individual ratings in submission order, each on a 1-10 scale.
    pub ratings: Vec<u32>,
    /// Cumulative rating total persisted alongside the individual ratings.
    /// Kept in sync on write; may be briefly stale on read-side copies.
    pub total_ratings: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntry {
    pub fn new(name: String, director: String, genre: String, release_year: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            director,
            genre,
            release_year,
            ratings: Vec::new(),
            total_ratings: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn vote_count(&self) -> usize {
        self.ratings.len()
    }

    pub fn add_rating(&mut self, rating: u32) {
        self.ratings.push(rating);
        self.total_ratings += rating as i64;
        self.updated_at = Utc::now();
    }

    /// URL slug for the entry's detail page, spaces replaced with hyphens.
    pub fn slug(&self) -> String {
        format_url(&self.name)
    }
}
