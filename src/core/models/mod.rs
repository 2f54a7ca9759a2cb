mod result_block;
mod search_error;
mod search_query;
mod search_result;
mod user_settings;

pub use result_block::{ResultBlock, ResultsNotice};
pub use search_error::SearchError;
pub use search_query::SearchQuery;
pub use search_result::SearchResult;
pub use user_settings::{ThemeMode, UserSettings};
