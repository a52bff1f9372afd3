use uuid::Uuid;

use super::super::entities::catalog_entry::CatalogEntry;

/// Synchronous lookup into the already-loaded catalog dataset.
///
/// The watchlist board store resolves dropped item identifiers against this
/// view; lookups must not block on I/O.
pub trait CatalogDataset: Send + Sync {
    fn find(&self, id: &Uuid) -> Option<CatalogEntry>;
}
