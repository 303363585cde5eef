use super::mode::{SearchFilters, SearchMode};
use super::pagination::Pagination;
use crate::syllabus::client::{Endpoint, SearchError, SyllabusApi};
use crate::syllabus::models::SyllabusRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// A search that has been started and is waiting for the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: u64,
    pub mode: SearchMode,
    pub query: String,
}

impl SearchRequest {
    pub fn endpoint(&self) -> Endpoint {
        self.mode.endpoint()
    }

    pub async fn send<A>(&self, api: &A) -> Result<Vec<SyllabusRecord>, SearchError>
    where
        A: SyllabusApi + ?Sized,
    {
        api.search(self.endpoint(), &self.query).await
    }
}

/// What `complete_search` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied { count: usize },
    Failed,
    /// A newer search was started after this one; the response was dropped
    Stale,
}

/// Everything the search page shows. Held for the life of the page only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    query: String,
    filters: SearchFilters,
    results: Vec<SyllabusRecord>,
    loading: bool,
    pagination: Pagination,
    last_error: Option<String>,
    #[serde(skip)]
    latest_ticket: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

impl SearchState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            filters: SearchFilters::default(),
            results: Vec::new(),
            loading: false,
            pagination: Pagination::new(page_size),
            last_error: None,
            latest_ticket: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> SearchFilters {
        self.filters
    }

    pub fn results(&self) -> &[SyllabusRecord] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Rows on the current page
    pub fn visible_results(&self) -> &[SyllabusRecord] {
        self.pagination.visible(&self.results)
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.results.len())
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn toggle_name_filter(&mut self, checked: bool) {
        self.filters.by_name = checked;
    }

    pub fn toggle_teacher_filter(&mut self, checked: bool) {
        self.filters.by_teacher = checked;
    }

    /// Move the visible window. Never fetches.
    pub fn change_page(&mut self, page: usize) -> usize {
        let selected = self.pagination.set_page(page, self.results.len());
        debug!("Page changed to {} (requested {})", selected, page);
        selected
    }

    /// Start a search from the current query and filters.
    ///
    /// Returns `None` without touching any state when the query is empty.
    /// Otherwise the page is loading until `complete_search` is called with
    /// the returned request's ticket.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        if self.query.is_empty() {
            return None;
        }

        self.latest_ticket += 1;
        self.loading = true;
        self.last_error = None;

        let request = SearchRequest {
            ticket: self.latest_ticket,
            mode: self.filters.mode(),
            query: self.query.clone(),
        };

        info!(
            "🔍 Search #{}: {:?} '{}' via /syllabus/{}",
            request.ticket,
            request.mode,
            request.query,
            request.endpoint()
        );
        Some(request)
    }

    /// Settle a search started by `begin_search`.
    ///
    /// Results are replaced as a whole on success and left as they were on
    /// failure. Only the most recently issued ticket is applied.
    pub fn complete_search(
        &mut self,
        ticket: u64,
        outcome: Result<Vec<SyllabusRecord>, SearchError>,
    ) -> Completion {
        if ticket != self.latest_ticket {
            debug!(
                "Dropping response for search #{}, #{} is newer",
                ticket, self.latest_ticket
            );
            return Completion::Stale;
        }

        self.loading = false;

        match outcome {
            Ok(records) => {
                let count = records.len();
                self.results = records;
                self.pagination.reset();
                Completion::Applied { count }
            }
            Err(e) => {
                error!("Search #{} failed: {}", ticket, e);
                self.last_error = Some(e.to_string());
                Completion::Failed
            }
        }
    }
}
