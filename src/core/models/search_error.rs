use thiserror::Error;

use crate::global_constants;

/// Everything that can go wrong between the search box and the results container.
///
/// Only `EmptyQuery` is shown to the user as-is; the remaining kinds all
/// collapse into the same generic failure notice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("search query is empty")]
    EmptyQuery,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("failed to parse search response: {0}")]
    Parse(String),
}

impl SearchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => global_constants::USER_MESSAGE_EMPTY_QUERY,
            SearchError::Network(_) | SearchError::HttpStatus(_) | SearchError::Parse(_) => {
                global_constants::USER_MESSAGE_SEARCH_FAILED
            }
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return SearchError::HttpStatus(status.as_u16());
        }
        if error.is_decode() {
            return SearchError::Parse(error.to_string());
        }
        SearchError::Network(error.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::Parse(error.to_string())
    }
}
