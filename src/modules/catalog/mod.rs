pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::{CatalogService, EntryDraft};
pub use domain::{BrowseQuery, CatalogDataset, CatalogEntry, CatalogRepository, SortField};
pub use infrastructure::in_memory_catalog::InMemoryCatalog;
