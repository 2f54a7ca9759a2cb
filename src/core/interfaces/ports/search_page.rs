use crate::core::models::{ResultBlock, ResultsNotice};

/// The page elements the search controller drives: the query box, a blocking
/// alert, the loading indicator and the results container.
pub trait SearchPage {
    fn read_query_input(&self) -> String;

    fn show_alert(&mut self, message: &str);

    fn set_loading_visible(&mut self, visible: bool);

    fn clear_results(&mut self);

    fn append_result_block(&mut self, block: ResultBlock);

    /// Replaces whatever the results container holds with a single message.
    fn show_notice(&mut self, notice: ResultsNotice);
}
