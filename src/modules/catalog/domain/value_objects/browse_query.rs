use serde::{Deserialize, Serialize};

/// Fields the catalog can be ordered by, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    ReleaseYear,
    TotalRatings,
    CreatedAt,
}

/// Parameters for a catalog browse request.
///
/// Mirrors the query surface of the catalog endpoint: explicit limit/page
/// pagination, a free-text name prefix, genre and release-year filters, and
/// an optional sort field. When no sort is given, results are ordered by
/// creation time descending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
    pub limit: Option<usize>,
    pub page: Option<usize>,
    pub query: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub order_by: Option<SortField>,
}

impl BrowseQuery {
    /// Page-based pagination; pages are 1-based.
    pub fn paginated(limit: usize, page: usize) -> Self {
        Self {
            limit: Some(limit),
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn name_prefix(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_order(mut self, order_by: SortField) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Explicit (take, skip) window when both limit and page are present.
    pub fn pagination_window(&self) -> Option<(usize, usize)> {
        match (self.limit, self.page) {
            (Some(limit), Some(page)) => Some((limit, page.saturating_sub(1) * limit)),
            _ => None,
        }
    }

    /// Sort field with the default applied.
    pub fn effective_order(&self) -> SortField {
        self.order_by.unwrap_or(SortField::CreatedAt)
    }
}
