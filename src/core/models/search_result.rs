use serde::Deserialize;

/// One ranked record from the search backend.
///
/// Fields the results list does not show (photo, facilities, prices) are
/// skipped during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub location: String,
    pub avg_rating: f64,
    pub top_vsm_score: f64,
    #[serde(default)]
    pub gmaps_link: Option<String>,
}

impl SearchResult {
    pub fn new(name: &str, location: &str, avg_rating: f64, top_vsm_score: f64) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
            avg_rating,
            top_vsm_score,
            gmaps_link: None,
        }
    }

    #[cfg(test)]
    pub fn with_gmaps_link(mut self, gmaps_link: &str) -> Self {
        self.gmaps_link = Some(gmaps_link.to_string());
        self
    }
}
