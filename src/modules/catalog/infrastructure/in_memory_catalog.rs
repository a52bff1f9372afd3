use async_trait::async_trait;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use super::super::domain::entities::catalog_entry::CatalogEntry;
use super::super::domain::repositories::catalog_dataset::CatalogDataset;
use super::super::domain::repositories::catalog_repository::CatalogRepository;
use super::super::domain::value_objects::browse_query::{BrowseQuery, SortField};
use crate::shared::config::{BROWSE_OVERFETCH, BROWSE_PAGE_SIZE};
use crate::shared::errors::{AppError, AppResult};

/// Catalog storage backed by a plain in-memory list.
///
/// Implements the async [`CatalogRepository`] seam for browse/save flows and
/// the synchronous [`CatalogDataset`] view the watchlist store resolves drop
/// identifiers against.
pub struct InMemoryCatalog {
    entries: RwLock<Vec<CatalogEntry>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<CatalogEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<CatalogEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_descending(entries: &mut [CatalogEntry], field: SortField) {
    match field {
        SortField::Name => entries.sort_by(|a, b| b.name.cmp(&a.name)),
        SortField::ReleaseYear => entries.sort_by(|a, b| b.release_year.cmp(&a.release_year)),
        SortField::TotalRatings => entries.sort_by(|a, b| b.total_ratings.cmp(&a.total_ratings)),
        SortField::CreatedAt => entries.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<CatalogEntry>> {
        Ok(self.read().iter().find(|entry| &entry.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<CatalogEntry>> {
        Ok(self.read().iter().find(|entry| entry.name == name).cloned())
    }

    async fn browse(&self, query: &BrowseQuery) -> AppResult<Vec<CatalogEntry>> {
        let mut entries = self.read().clone();

        // Filter selection mirrors the endpoint's precedence: explicit
        // pagination wins, then name prefix, then genre/year with overfetch.
        let window = query.pagination_window();
        let mut take = None;
        if window.is_none() {
            if let Some(prefix) = query.query.as_deref().filter(|q| !q.is_empty()) {
                entries.retain(|entry| entry.name.starts_with(prefix));
            } else if query.genre.is_some() || query.year.is_some() {
                if let Some(genre) = query.genre.as_deref() {
                    entries.retain(|entry| entry.genre == genre);
                }
                if let Some(year) = query.year {
                    entries.retain(|entry| entry.release_year == year);
                }
                take = Some(BROWSE_PAGE_SIZE + BROWSE_OVERFETCH);
            }
        }

        sort_descending(&mut entries, query.effective_order());

        if let Some((limit, skip)) = window {
            entries = entries.into_iter().skip(skip).take(limit).collect();
        } else if let Some(count) = take {
            entries.truncate(count);
        }

        Ok(entries)
    }

    async fn save(&self, entry: &CatalogEntry) -> AppResult<CatalogEntry> {
        let mut entries = self.write();
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(AppError::ValidationError(format!(
                "Entry with ID {} already exists",
                entry.id
            )));
        }
        entries.push(entry.clone());
        Ok(entry.clone())
    }

    async fn update(&self, entry: &CatalogEntry) -> AppResult<CatalogEntry> {
        let mut entries = self.write();
        match entries.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => {
                *existing = entry.clone();
                Ok(entry.clone())
            }
            None => Err(AppError::NotFound(format!(
                "Anime with ID {} not found",
                entry.id
            ))),
        }
    }
}

impl CatalogDataset for InMemoryCatalog {
    fn find(&self, id: &Uuid) -> Option<CatalogEntry> {
        self.read().iter().find(|entry| &entry.id == id).cloned()
    }
}
