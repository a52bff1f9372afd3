use otaku_sphere::CatalogEntry;

/// Builds a catalog entry with a fixed rating aggregate. Votes are evenly
/// sized so `total / votes` is the average rating being modelled.
pub fn rated_entry(name: &str, total: i64, votes: usize) -> CatalogEntry {
    let mut entry = CatalogEntry::new(
        name.to_string(),
        "Director".to_string(),
        "Drama".to_string(),
        2010,
    );
    entry.ratings = vec![0; votes];
    entry.total_ratings = total;
    entry
}
