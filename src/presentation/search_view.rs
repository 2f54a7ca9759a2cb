use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use crate::core::interfaces::ports::SearchPage;
use crate::core::models::{ResultBlock, ResultsNotice, ThemeMode};
use crate::global_constants::{self, LOG_TAG_SEARCH_VIEW};
use crate::presentation::app_theme;

pub struct SearchView {
    query_input: String,
    loading_visible: bool,
    result_blocks: Vec<ResultBlock>,
    notice: Option<ResultsNotice>,
    spinner_frame: usize,
    theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum SearchViewMessage {
    QueryChanged(String),
    SearchTriggered,
    OpenMapLink(String),
    OpenSettings,
}

impl SearchView {
    pub fn build(theme_mode: ThemeMode) -> Self {
        Self {
            query_input: String::new(),
            loading_visible: false,
            result_blocks: Vec::new(),
            notice: None,
            spinner_frame: 0,
            theme_mode,
        }
    }

    pub fn update(&mut self, message: SearchViewMessage) {
        match message {
            SearchViewMessage::QueryChanged(query) => {
                self.query_input = query;
            }
            SearchViewMessage::OpenMapLink(link) => {
                log::info!("{} Opening map link {}", LOG_TAG_SEARCH_VIEW, link);
                if let Err(e) = open::that(&link) {
                    log::error!("{} Failed to open map link: {}", LOG_TAG_SEARCH_VIEW, e);
                }
            }
            SearchViewMessage::SearchTriggered | SearchViewMessage::OpenSettings => {}
        }
    }

    pub fn advance_spinner(&mut self) {
        if self.loading_visible {
            self.spinner_frame = (self.spinner_frame + 1) % global_constants::SPINNER_FRAMES.len();
        }
    }

    pub fn is_loading_visible(&self) -> bool {
        self.loading_visible
    }

    pub fn set_theme_mode(&mut self, theme_mode: ThemeMode) {
        self.theme_mode = theme_mode;
    }

    pub fn render_ui(&self) -> Element<'_, SearchViewMessage> {
        let title = text(global_constants::APPLICATION_TITLE).size(28);

        let search_input = text_input(global_constants::SEARCH_INPUT_PLACEHOLDER, &self.query_input)
            .on_input(SearchViewMessage::QueryChanged)
            .on_submit(SearchViewMessage::SearchTriggered)
            .padding(12)
            .size(16)
            .width(Length::Fill);

        let search_btn = button(text(global_constants::SEARCH_BUTTON_LABEL).size(16))
            .padding([12, 24])
            .style(app_theme::primary_button_style)
            .on_press(SearchViewMessage::SearchTriggered);

        let settings_btn = button(text("⚙").size(16))
            .padding([12, 14])
            .style(app_theme::secondary_button_style)
            .on_press(SearchViewMessage::OpenSettings);

        let search_row = row![search_input, search_btn, settings_btn]
            .spacing(10)
            .align_y(Alignment::Center);

        let mut content = column![title, search_row].spacing(20).padding(24).width(Length::Fill);

        if self.loading_visible {
            let frame = global_constants::SPINNER_FRAMES
                [self.spinner_frame % global_constants::SPINNER_FRAMES.len()];
            content = content.push(
                text(format!("{} {}", frame, global_constants::USER_MESSAGE_LOADING)).size(15),
            );
        }

        content = content.push(scrollable(self.render_results()).height(Length::Fill));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_theme::page_style(&self.theme_mode))
            .into()
    }

    fn render_results(&self) -> Element<'_, SearchViewMessage> {
        if let Some(notice) = self.notice {
            let message = text(notice.message()).size(16);
            return if notice.is_error() {
                message
                    .style(|_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(app_theme::ERROR_TEXT_COLOR),
                    })
                    .into()
            } else {
                message.into()
            };
        }

        self.result_blocks
            .iter()
            .fold(Column::new().spacing(16).width(Length::Fill), |results, block| {
                results.push(render_result_block(block))
            })
            .into()
    }
}

fn render_result_block(block: &ResultBlock) -> Element<'_, SearchViewMessage> {
    let detail_style = |_theme: &iced::Theme| iced::widget::text::Style {
        color: Some(app_theme::MUTED_TEXT_COLOR),
    };

    let mut details = column![
        text(block.name.as_str()).size(20),
        text(format!("{}: {}", global_constants::LABEL_LOCATION, block.location))
            .size(14)
            .style(detail_style),
        text(format!("{}: {}", global_constants::LABEL_RATING, block.rating))
            .size(14)
            .style(detail_style),
        text(format!("{}: {}", global_constants::LABEL_SCORE, block.score))
            .size(14)
            .style(detail_style),
    ]
    .spacing(6);

    if let Some(link) = &block.map_link {
        details = details.push(
            button(text(global_constants::LABEL_MAP_LINK).size(13))
                .padding([6, 12])
                .style(app_theme::secondary_button_style)
                .on_press(SearchViewMessage::OpenMapLink(link.clone())),
        );
    }

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(app_theme::separator_style);

    column![details, separator].spacing(12).into()
}

impl SearchPage for SearchView {
    fn read_query_input(&self) -> String {
        self.query_input.clone()
    }

    fn show_alert(&mut self, message: &str) {
        log::warn!("{} Alert: {}", LOG_TAG_SEARCH_VIEW, message);
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(global_constants::APPLICATION_TITLE)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn set_loading_visible(&mut self, visible: bool) {
        log::debug!("{} Loading indicator visible: {}", LOG_TAG_SEARCH_VIEW, visible);
        self.loading_visible = visible;
        self.spinner_frame = 0;
    }

    fn clear_results(&mut self) {
        self.result_blocks.clear();
        self.notice = None;
    }

    fn append_result_block(&mut self, block: ResultBlock) {
        self.result_blocks.push(block);
    }

    fn show_notice(&mut self, notice: ResultsNotice) {
        self.result_blocks.clear();
        self.notice = Some(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SearchResult;

    fn camp_block(name: &str) -> ResultBlock {
        ResultBlock::build_from_result(&SearchResult::new(name, "Jogja", 4.5, 0.8765))
    }

    #[test]
    fn test_build_starts_idle_and_empty() {
        let view = SearchView::build(ThemeMode::Light);

        assert!(view.read_query_input().is_empty());
        assert!(!view.is_loading_visible());
        assert!(view.result_blocks.is_empty());
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_query_changed_updates_input() {
        let mut view = SearchView::build(ThemeMode::Light);

        view.update(SearchViewMessage::QueryChanged("sejuk di jogja".to_string()));

        assert_eq!(view.read_query_input(), "sejuk di jogja");
    }

    #[test]
    fn test_notice_replaces_blocks_and_clear_resets_everything() {
        let mut view = SearchView::build(ThemeMode::Dark);
        view.append_result_block(camp_block("Camp A"));

        view.show_notice(ResultsNotice::SearchFailed);
        assert!(view.result_blocks.is_empty());
        assert_eq!(view.notice, Some(ResultsNotice::SearchFailed));

        view.clear_results();
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_blocks_append_in_order() {
        let mut view = SearchView::build(ThemeMode::Dark);

        view.append_result_block(camp_block("Camp A"));
        view.append_result_block(camp_block("Camp B"));

        let names: Vec<&str> = view.result_blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Camp A", "Camp B"]);
    }

    #[test]
    fn test_spinner_only_advances_while_loading() {
        let mut view = SearchView::build(ThemeMode::Light);

        view.advance_spinner();
        assert_eq!(view.spinner_frame, 0);

        view.set_loading_visible(true);
        for _ in 0..global_constants::SPINNER_FRAMES.len() + 1 {
            view.advance_spinner();
        }
        assert_eq!(view.spinner_frame, 1);

        view.set_loading_visible(false);
        assert_eq!(view.spinner_frame, 0);
    }
}
