mod search_backend;

pub use search_backend::SearchBackend;
