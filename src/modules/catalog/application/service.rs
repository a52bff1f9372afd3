use std::sync::Arc;
use uuid::Uuid;

use super::super::domain::{
    entities::catalog_entry::CatalogEntry, repositories::catalog_repository::CatalogRepository,
    value_objects::browse_query::BrowseQuery,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::formatting::parse_url_slug;
use crate::{log_debug, log_info};

/// Fields accepted when creating or editing a catalog entry.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub name: String,
    pub description: Option<String>,
    pub director: String,
    pub genre: String,
    pub release_year: i32,
}

pub struct CatalogService {
    catalog_repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog_repo: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog_repo }
    }

    pub async fn create_entry(&self, draft: EntryDraft) -> AppResult<CatalogEntry> {
        Self::validate_draft(&draft)?;

        // Names are unique across the catalog
        if self.catalog_repo.find_by_name(&draft.name).await?.is_some() {
            return Err(AppError::ValidationError(format!(
                "Anime '{}' already exists",
                draft.name
            )));
        }

        let mut entry = CatalogEntry::new(
            draft.name,
            draft.director,
            draft.genre,
            draft.release_year,
        );
        if let Some(description) = draft.description {
            entry = entry.with_description(description);
        }

        let saved = self.catalog_repo.save(&entry).await?;
        log_info!("Created catalog entry '{}' ({})", saved.name, saved.id);
        Ok(saved)
    }

    pub async fn update_entry(&self, id: &Uuid, draft: EntryDraft) -> AppResult<CatalogEntry> {
        Self::validate_draft(&draft)?;

        // Check if another entry already uses this name
        if let Some(existing) = self.catalog_repo.find_by_name(&draft.name).await? {
            if &existing.id != id {
                return Err(AppError::ValidationError(format!(
                    "Anime '{}' already exists",
                    draft.name
                )));
            }
        }

        let mut entry = self
            .catalog_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Anime with ID {} not found", id)))?;

        entry.name = draft.name;
        entry.description = draft.description;
        entry.director = draft.director;
        entry.genre = draft.genre;
        entry.release_year = draft.release_year;
        entry.updated_at = chrono::Utc::now();

        let updated = self.catalog_repo.update(&entry).await?;
        Ok(updated)
    }

    pub async fn browse(&self, query: &BrowseQuery) -> AppResult<Vec<CatalogEntry>> {
        let entries = self.catalog_repo.browse(query).await?;
        log_debug!("Browse returned {} entries", entries.len());
        Ok(entries)
    }

    /// Resolves a detail-page slug back to its catalog entry.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<CatalogEntry>> {
        let name = parse_url_slug(slug)?;
        self.catalog_repo.find_by_name(&name).await
    }

    fn validate_draft(draft: &EntryDraft) -> AppResult<()> {
        crate::shared::utils::Validator::validate_anime_name(&draft.name)?;
        crate::shared::utils::Validator::validate_genre(&draft.genre)?;
        crate::shared::utils::Validator::validate_release_year(draft.release_year)?;
        Ok(())
    }
}
