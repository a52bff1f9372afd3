use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::super::domain::services::rank_calculator::{compute_rankings, entry_hrefs};
use super::super::domain::value_objects::ranked_row::RankedRow;
use crate::modules::catalog::domain::entities::catalog_entry::CatalogEntry;
use crate::modules::catalog::domain::repositories::catalog_repository::CatalogRepository;
use crate::modules::catalog::domain::value_objects::browse_query::{BrowseQuery, SortField};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;
use crate::log_debug;

struct LeaderboardPages {
    entries: Vec<CatalogEntry>,
    next_page: usize,
}

/// Accumulates leaderboard pages fetched from the catalog and recomputes
/// rankings over everything loaded so far, the way the infinite-scroll
/// leaderboard composes its table.
pub struct LeaderboardService {
    catalog: Arc<dyn CatalogRepository>,
    page_size: usize,
    pages: Mutex<LeaderboardPages>,
}

impl LeaderboardService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, page_size: usize) -> Self {
        Self {
            catalog,
            page_size,
            pages: Mutex::new(LeaderboardPages {
                entries: Vec::new(),
                next_page: 1,
            }),
        }
    }

    pub fn with_default_page_size(catalog: Arc<dyn CatalogRepository>) -> Self {
        let config = AppConfig::from_env();
        Self::new(catalog, config.leaderboard_page_size)
    }

    fn pages(&self) -> MutexGuard<'_, LeaderboardPages> {
        self.pages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches the next page, ordered by cumulative rating total descending,
    /// and appends it to the loaded set. Returns how many entries arrived.
    ///
    /// The page number is reserved before the fetch so that overlapping
    /// calls request distinct pages; a failed fetch hands its page back.
    pub async fn load_next_page(&self) -> AppResult<usize> {
        let page = {
            let mut pages = self.pages();
            let page = pages.next_page;
            pages.next_page = page + 1;
            page
        };
        let query =
            BrowseQuery::paginated(self.page_size, page).with_order(SortField::TotalRatings);
        match self.catalog.browse(&query).await {
            Ok(fetched) => {
                let count = fetched.len();
                log_debug!("Leaderboard page {} brought {} entries", page, count);
                self.pages().entries.extend(fetched);
                Ok(count)
            }
            Err(err) => {
                let mut pages = self.pages();
                if pages.next_page == page + 1 {
                    pages.next_page = page;
                }
                Err(err)
            }
        }
    }

    /// Ranking rows over every entry loaded so far.
    pub fn rows(&self) -> Vec<RankedRow> {
        compute_rankings(&self.pages().entries)
    }

    /// Detail-page links parallel to [`Self::rows`].
    pub fn hrefs(&self) -> Vec<String> {
        entry_hrefs(&self.pages().entries)
    }

    pub fn loaded_len(&self) -> usize {
        self.pages().entries.len()
    }

    /// Drops everything loaded and starts again from the first page.
    pub fn reset(&self) {
        let mut pages = self.pages();
        pages.entries.clear();
        pages.next_page = 1;
    }
}
