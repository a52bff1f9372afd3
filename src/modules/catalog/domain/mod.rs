pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::catalog_entry::CatalogEntry;
pub use repositories::catalog_dataset::CatalogDataset;
pub use repositories::catalog_repository::CatalogRepository;
pub use value_objects::browse_query::{BrowseQuery, SortField};
