use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::core::interfaces::adapters::SearchBackend;
use crate::core::models::{SearchError, SearchQuery, SearchResult};
use crate::global_constants::{LOG_TAG_HTTP_BACKEND, SEARCH_ENDPOINT_PATH, SEARCH_QUERY_PARAMETER};

pub struct HttpSearchBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSearchBackend {
    pub fn build(base_url: &str, request_timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = request_timeout {
            log::debug!("{} Using request timeout {:?}", LOG_TAG_HTTP_BACKEND, timeout);
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn construct_search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}{}?{}={}",
            self.base_url,
            SEARCH_ENDPOINT_PATH,
            SEARCH_QUERY_PARAMETER,
            query.percent_encoded()
        )
    }
}

fn parse_search_body(body: &str) -> Result<Option<Vec<SearchResult>>, SearchError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let results: Option<Vec<SearchResult>> = serde_json::from_str(body)?;
    Ok(results)
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &SearchQuery) -> Result<Option<Vec<SearchResult>>, SearchError> {
        let search_url = self.construct_search_url(query);
        log::debug!("{} GET {}", LOG_TAG_HTTP_BACKEND, search_url);

        let response = self.client.get(&search_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} Backend answered with status {}", LOG_TAG_HTTP_BACKEND, status);
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        log::debug!("{} Received {} bytes", LOG_TAG_HTTP_BACKEND, body.len());

        parse_search_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_test_server::{closed_port_url, serve_once, serve_silently};

    fn create_test_backend(base_url: &str, request_timeout: Option<Duration>) -> HttpSearchBackend {
        let mut builder = reqwest::Client::builder().no_proxy();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        HttpSearchBackend::with_client(builder.build().unwrap(), base_url)
    }

    fn query(text: &str) -> SearchQuery {
        SearchQuery::parse(text).unwrap()
    }

    #[test]
    fn test_construct_search_url_percent_encodes_query() {
        let backend = create_test_backend("http://localhost:5000", None);

        let url = backend.construct_search_url(&query("sejuk di jogja"));

        assert_eq!(url, "http://localhost:5000/search?q=sejuk%20di%20jogja");
    }

    #[test]
    fn test_construct_search_url_strips_trailing_slash() {
        let backend = create_test_backend("http://localhost:5000/ ", None);

        let url = backend.construct_search_url(&query("kemah"));

        assert_eq!(url, "http://localhost:5000/search?q=kemah");
    }

    #[test]
    fn test_parse_search_body_variants() {
        assert_eq!(parse_search_body(""), Ok(None));
        assert_eq!(parse_search_body("  \n"), Ok(None));
        assert_eq!(parse_search_body("null"), Ok(None));
        assert_eq!(parse_search_body("[]"), Ok(Some(vec![])));
        assert!(matches!(
            parse_search_body("<html>oops</html>"),
            Err(SearchError::Parse(_))
        ));
        assert!(matches!(
            parse_search_body(r#"{"name":"not a list"}"#),
            Err(SearchError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_search_sends_single_get_with_encoded_query() {
        let (base_url, server) = serve_once("200 OK", "[]").await;
        let backend = create_test_backend(&base_url, None);

        let result = backend.search(&query("sejuk di jogja")).await;

        assert_eq!(result, Ok(Some(vec![])));
        assert_eq!(
            server.await.unwrap(),
            "GET /search?q=sejuk%20di%20jogja HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_search_parses_results_in_backend_order() {
        let body = r#"[
            {"name":"Camp A","location":"Jogja","avg_rating":4.5,"top_vsm_score":0.8765},
            {"name":"Camp B","location":"Kendal","avg_rating":3.9,"top_vsm_score":0.5}
        ]"#;
        let (base_url, _server) = serve_once("200 OK", body).await;
        let backend = create_test_backend(&base_url, None);

        let results = backend.search(&query("kemah")).await.unwrap().unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Camp A");
        assert_eq!(results[1].name, "Camp B");
    }

    #[tokio::test]
    async fn test_search_treats_empty_body_as_absent() {
        let (base_url, _server) = serve_once("200 OK", "").await;
        let backend = create_test_backend(&base_url, None);

        assert_eq!(backend.search(&query("kemah")).await, Ok(None));
    }

    #[tokio::test]
    async fn test_search_rejects_server_error_regardless_of_body() {
        let (base_url, _server) = serve_once(
            "500 Internal Server Error",
            r#"[{"name":"Camp A","location":"Jogja","avg_rating":4.5,"top_vsm_score":0.8765}]"#,
        )
        .await;
        let backend = create_test_backend(&base_url, None);

        assert_eq!(
            backend.search(&query("kemah")).await,
            Err(SearchError::HttpStatus(500))
        );
    }

    #[tokio::test]
    async fn test_search_reports_malformed_json_as_parse_error() {
        let (base_url, _server) = serve_once("200 OK", "{not json").await;
        let backend = create_test_backend(&base_url, None);

        assert!(matches!(
            backend.search(&query("kemah")).await,
            Err(SearchError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_search_reports_refused_connection_as_network_error() {
        let base_url = closed_port_url().await;
        let backend = create_test_backend(&base_url, None);

        assert!(matches!(
            backend.search(&query("kemah")).await,
            Err(SearchError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_search_honours_configured_timeout() {
        let (base_url, _server) = serve_silently().await;
        let backend = create_test_backend(&base_url, Some(Duration::from_millis(200)));

        assert!(matches!(
            backend.search(&query("kemah")).await,
            Err(SearchError::Network(_))
        ));
    }
}
