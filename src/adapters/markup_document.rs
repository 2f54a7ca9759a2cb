use crate::core::interfaces::ports::SearchPage;
use crate::core::models::{ResultBlock, ResultsNotice};

/// A headless search page whose results container is an HTML fragment.
#[derive(Debug, Default)]
pub struct MarkupDocument {
    query_input: String,
    loading_visible: bool,
    results_markup: String,
    alerts: Vec<String>,
}

impl MarkupDocument {
    pub fn with_query(query_input: &str) -> Self {
        Self {
            query_input: query_input.to_string(),
            ..Default::default()
        }
    }

    pub fn results_markup(&self) -> &str {
        &self.results_markup
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn is_loading_visible(&self) -> bool {
        self.loading_visible
    }
}

impl SearchPage for MarkupDocument {
    fn read_query_input(&self) -> String {
        self.query_input.clone()
    }

    fn show_alert(&mut self, message: &str) {
        log::warn!("[MARKUP] Alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn set_loading_visible(&mut self, visible: bool) {
        log::debug!("[MARKUP] Loading indicator visible: {}", visible);
        self.loading_visible = visible;
    }

    fn clear_results(&mut self) {
        self.results_markup.clear();
    }

    fn append_result_block(&mut self, block: ResultBlock) {
        self.results_markup.push_str(&block.to_markup());
    }

    fn show_notice(&mut self, notice: ResultsNotice) {
        self.results_markup = notice.to_markup();
    }
}
