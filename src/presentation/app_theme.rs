use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub const ERROR_TEXT_COLOR: Color = Color::from_rgb(0.85, 0.2, 0.2);
pub const MUTED_TEXT_COLOR: Color = Color::from_rgb(0.55, 0.55, 0.55);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Forest Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.09, 0.07),
                text: Color::from_rgb(0.95, 0.95, 0.92),
                primary: Color::from_rgb(0.333, 0.420, 0.184),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Forest Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.96, 0.96, 0.93),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.333, 0.420, 0.184),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn solid_button(background: Color, text_color: Color, border_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

fn disabled_button() -> button::Style {
    solid_button(
        Color::from_rgb(0.3, 0.3, 0.3),
        Color::from_rgb(0.5, 0.5, 0.5),
        Color::from_rgb(0.4, 0.4, 0.4),
        false,
    )
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => {
            let green = Color::from_rgb(0.333, 0.420, 0.184);
            solid_button(green, Color::WHITE, green, false)
        }
        button::Status::Hovered => {
            let green = Color::from_rgb(0.420, 0.525, 0.235);
            solid_button(green, Color::WHITE, green, false)
        }
        button::Status::Pressed => {
            let green = Color::from_rgb(0.255, 0.322, 0.141);
            solid_button(green, Color::WHITE, green, true)
        }
        button::Status::Disabled => disabled_button(),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => solid_button(
            Color::from_rgb(0.25, 0.25, 0.25),
            Color::from_rgb(0.8, 0.8, 0.8),
            Color::from_rgb(0.4, 0.4, 0.4),
            false,
        ),
        button::Status::Hovered => solid_button(
            Color::from_rgb(0.35, 0.35, 0.35),
            Color::from_rgb(0.9, 0.9, 0.9),
            Color::from_rgb(0.5, 0.5, 0.5),
            false,
        ),
        button::Status::Pressed => solid_button(
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::from_rgb(0.8, 0.8, 0.8),
            Color::from_rgb(0.35, 0.35, 0.35),
            true,
        ),
        button::Status::Disabled => disabled_button(),
    }
}

pub fn separator_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.4))),
        ..Default::default()
    }
}

pub fn page_style(mode: &ThemeMode) -> impl Fn(&Theme) -> container::Style {
    let palette = get_theme(mode).palette();
    move |_theme| container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        ..Default::default()
    }
}
