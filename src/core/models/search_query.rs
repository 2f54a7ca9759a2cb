use std::fmt;

use crate::core::models::SearchError;

/// Trimmed, non-empty text typed into the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    pub fn parse(raw_input: &str) -> Result<Self, SearchError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Percent-encodes everything outside `A-Z a-z 0-9 - _ . ~`.
    ///
    /// `! ' ( ) *` are encoded as well, even though they are legal in a query
    /// string; the server decodes either form to the same query.
    pub fn percent_encoded(&self) -> String {
        urlencoding::encode(&self.text).into_owned()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
