use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::catalog_entry::CatalogEntry;
use super::super::value_objects::browse_query::BrowseQuery;
use crate::shared::errors::AppResult;

/// Persistent catalog storage seam. The production implementation lives
/// behind the web tier; [`crate::InMemoryCatalog`] serves embedded callers
/// and tests.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<CatalogEntry>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<CatalogEntry>>;
    /// Filtered, ordered, optionally paginated listing. See [`BrowseQuery`]
    /// for the composition rules.
    async fn browse(&self, query: &BrowseQuery) -> AppResult<Vec<CatalogEntry>>;
    async fn save(&self, entry: &CatalogEntry) -> AppResult<CatalogEntry>;
    async fn update(&self, entry: &CatalogEntry) -> AppResult<CatalogEntry>;
}
