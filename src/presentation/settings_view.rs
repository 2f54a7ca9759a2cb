use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Background, Color, Element, Length};

use crate::core::models::{ThemeMode, UserSettings};
use crate::global_constants;
use crate::presentation::app_theme;

/// Edits a working copy of the settings; nothing is persisted until the
/// orchestrator receives `Save`.
pub struct SettingsView {
    draft: UserSettings,
}

#[derive(Debug, Clone)]
pub enum SettingsViewMessage {
    BaseUrlChanged(String),
    ThemeSelected(ThemeMode),
    Save,
}

impl SettingsView {
    pub fn build(current: &UserSettings) -> Self {
        Self {
            draft: current.clone(),
        }
    }

    pub fn update(&mut self, message: SettingsViewMessage) {
        match message {
            SettingsViewMessage::BaseUrlChanged(url) => self.draft.backend_base_url = url,
            SettingsViewMessage::ThemeSelected(mode) => self.draft.theme_mode = mode,
            SettingsViewMessage::Save => {}
        }
    }

    pub fn draft(&self) -> &UserSettings {
        &self.draft
    }

    pub fn render_ui(&self) -> Element<'_, SettingsViewMessage> {
        let title = text("Settings").size(28);

        let backend_section = render_setting_row(
            "Search backend",
            "Base URL serving GET /search",
            text_input(global_constants::DEFAULT_BACKEND_BASE_URL, &self.draft.backend_base_url)
                .on_input(SettingsViewMessage::BaseUrlChanged)
                .padding(12)
                .into(),
        );

        let theme_section = render_setting_row(
            "Theme",
            "Choose light or dark mode",
            pick_list(
                vec![ThemeMode::Light, ThemeMode::Dark],
                Some(self.draft.theme_mode.clone()),
                SettingsViewMessage::ThemeSelected,
            )
            .padding(12)
            .into(),
        );

        let save_btn = button(text("Save Changes").size(15))
            .padding([14, 36])
            .style(app_theme::primary_button_style)
            .on_press(SettingsViewMessage::Save);

        let sections = container(column![backend_section, theme_section].spacing(16))
            .padding([12, 16])
            .width(Length::Fill)
            .style(|_theme| iced::widget::container::Style {
                background: Some(Background::Color(Color::from_rgba(0.2, 0.2, 0.2, 0.15))),
                border: iced::Border {
                    color: Color::from_rgba(0.4, 0.4, 0.4, 0.3),
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            });

        let content = column![
            title,
            Space::new().height(Length::Fixed(16.0)),
            sections,
            Space::new().height(Length::Fixed(24.0)),
            save_btn,
        ]
        .padding(24)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_theme::page_style(&self.draft.theme_mode))
            .into()
    }
}

fn render_setting_row<'a>(
    label: &'a str,
    description: &'a str,
    input: Element<'a, SettingsViewMessage>,
) -> Element<'a, SettingsViewMessage> {
    let label_col = column![
        text(label).size(14),
        text(description)
            .size(11)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::MUTED_TEXT_COLOR),
            }),
    ]
    .spacing(2)
    .width(Length::FillPortion(2));

    let input_col = container(input).width(Length::FillPortion(3));

    row![label_col, input_col]
        .spacing(16)
        .align_y(Alignment::Center)
        .into()
}
