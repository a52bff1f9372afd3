pub mod browse_query;

pub use browse_query::{BrowseQuery, SortField};
