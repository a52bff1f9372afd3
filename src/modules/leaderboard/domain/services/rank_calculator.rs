use super::super::value_objects::ranked_row::RankedRow;
use crate::modules::catalog::domain::entities::catalog_entry::CatalogEntry;
use crate::shared::utils::formatting::{format_count, round_single_decimal};

/// Single-decimal rating derived from the entry's aggregates. Entries with
/// no votes score 0.
pub fn computed_rating(entry: &CatalogEntry) -> f64 {
    let vote_basis = entry.vote_count() as f64 * 10.0;
    if entry.vote_count() == 0 {
        return 0.0;
    }
    round_single_decimal(entry.total_ratings as f64 / vote_basis * 10.0)
}

/// Converts a rating-sorted entry sequence into display rows with tie-aware
/// ranks.
///
/// The input is assumed already sorted descending by computed rating and is
/// not re-sorted. Tied ratings share a rank; a row that breaks a tie gets
/// its 1-based position, not previous-rank + 1, so ranks skip after tie
/// groups (1, 1, 3, 4). Total over any input; empty in, empty out.
pub fn compute_rankings(entries: &[CatalogEntry]) -> Vec<RankedRow> {
    let mut rows: Vec<RankedRow> = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let rating = computed_rating(entry);
        let rank = if index == 0 {
            1
        } else {
            // Ratings are rounded to one decimal, so equality is exact.
            let previous = computed_rating(&entries[index - 1]);
            if rating == previous {
                rows[index - 1].rank
            } else {
                (index + 1) as u32
            }
        };

        rows.push(RankedRow {
            anime: entry.name.clone(),
            director: entry.director.clone(),
            genre: entry.genre.clone(),
            rating,
            rank,
            votes: format_count(entry.vote_count()),
        });
    }

    rows
}

/// Detail-page link for every input entry, parallel to the ranking rows.
pub fn entry_hrefs(entries: &[CatalogEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format!("/anime/{}", entry.slug()))
        .collect()
}
