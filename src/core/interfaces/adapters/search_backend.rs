use async_trait::async_trait;

use crate::core::models::{SearchError, SearchQuery, SearchResult};

/// The ranking service behind `GET /search`.
///
/// `Ok(None)` means the backend answered successfully with an empty body.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Option<Vec<SearchResult>>, SearchError>;
}
