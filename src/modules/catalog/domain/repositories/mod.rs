pub mod catalog_dataset;
pub mod catalog_repository;

pub use catalog_dataset::CatalogDataset;
pub use catalog_repository::CatalogRepository;
