use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::interfaces::adapters::SearchBackend;
use crate::core::interfaces::ports::SearchPage;
use crate::core::models::{
    ResultBlock, ResultsNotice, SearchError, SearchQuery, SearchResult,
};
use crate::global_constants::LOG_TAG_CONTROLLER;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub request_id: u64,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub request_id: u64,
    pub query: SearchQuery,
    pub result: Result<Option<Vec<SearchResult>>, SearchError>,
}

/// Drives one search round trip against a [`SearchPage`].
///
/// Every accepted search gets the next request id. Outcomes carrying an older
/// id than the most recently issued one are dropped, so the page always ends
/// up showing the latest search.
pub struct SearchController {
    search_backend: Arc<dyn SearchBackend>,
    latest_request_id: AtomicU64,
}

impl SearchController {
    pub fn build(search_backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            search_backend,
            latest_request_id: AtomicU64::new(0),
        }
    }

    /// Swaps the backend without resetting the request counter, so outcomes
    /// already in flight are still judged against the same sequence.
    pub fn replace_backend(&mut self, search_backend: Arc<dyn SearchBackend>) {
        self.search_backend = search_backend;
    }

    pub async fn perform_search(&self, page: &mut dyn SearchPage) {
        let Some(request) = self.begin_search(page) else {
            return;
        };

        let outcome = self.fetch_results(request).await;
        self.complete_search(page, outcome);
    }

    pub fn begin_search(&self, page: &mut dyn SearchPage) -> Option<SearchRequest> {
        let raw_input = page.read_query_input();

        let query = match SearchQuery::parse(&raw_input) {
            Ok(query) => query,
            Err(error) => {
                log::warn!("{} Rejected search: {}", LOG_TAG_CONTROLLER, error);
                page.show_alert(error.user_message());
                return None;
            }
        };

        let request_id = self.latest_request_id.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!(
            "{} Starting search #{} for '{}'",
            LOG_TAG_CONTROLLER,
            request_id,
            query
        );

        page.set_loading_visible(true);
        page.clear_results();

        Some(SearchRequest { request_id, query })
    }

    pub fn fetch_results(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = SearchOutcome> + Send + 'static {
        let search_backend = Arc::clone(&self.search_backend);

        async move {
            let result = search_backend.search(&request.query).await;
            SearchOutcome {
                request_id: request.request_id,
                query: request.query,
                result,
            }
        }
    }

    pub fn complete_search(&self, page: &mut dyn SearchPage, outcome: SearchOutcome) {
        let latest_request_id = self.latest_request_id.load(Ordering::SeqCst);
        if outcome.request_id != latest_request_id {
            log::info!(
                "{} Discarding stale response #{} for '{}' (latest is #{})",
                LOG_TAG_CONTROLLER,
                outcome.request_id,
                outcome.query,
                latest_request_id
            );
            return;
        }

        match outcome.result {
            Ok(results) => {
                log::info!(
                    "{} Search #{} returned {} results",
                    LOG_TAG_CONTROLLER,
                    outcome.request_id,
                    results.as_ref().map_or(0, Vec::len)
                );
                display_results(page, results.as_deref());
            }
            Err(error) => {
                log::error!(
                    "{} Error while fetching results for '{}': {}",
                    LOG_TAG_CONTROLLER,
                    outcome.query,
                    error
                );
                page.show_notice(ResultsNotice::SearchFailed);
            }
        }

        page.set_loading_visible(false);
    }
}

pub fn display_results(page: &mut dyn SearchPage, results: Option<&[SearchResult]>) {
    let results = match results {
        Some(results) if !results.is_empty() => results,
        _ => {
            page.show_notice(ResultsNotice::NoResults);
            return;
        }
    };

    for result in results {
        page.append_result_block(ResultBlock::build_from_result(result));
    }
}
