mod http_search_backend;
mod markup_document;

pub use http_search_backend::HttpSearchBackend;
pub use markup_document::MarkupDocument;
