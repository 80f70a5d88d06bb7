use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.0, 0.0, 0.0),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn filled_button(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => {
            filled_button(Color::from_rgb(0.098, 0.529, 0.329), Color::WHITE, false)
        }
        button::Status::Hovered => {
            filled_button(Color::from_rgb(0.122, 0.655, 0.408), Color::WHITE, false)
        }
        button::Status::Pressed => {
            filled_button(Color::from_rgb(0.078, 0.420, 0.263), Color::WHITE, true)
        }
        button::Status::Disabled => filled_button(
            Color::from_rgb(0.3, 0.3, 0.3),
            Color::from_rgb(0.5, 0.5, 0.5),
            false,
        ),
    }
}

/// Borderless button that reads as a hyperlink in the theme's primary color.
pub fn link_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.75,
            ..palette.primary
        },
        button::Status::Active => palette.primary,
        button::Status::Disabled => Color {
            a: 0.4,
            ..palette.primary
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn error_text_color(theme: &Theme) -> Color {
    theme.palette().danger
}

pub fn muted_text_color() -> Color {
    Color::from_rgba(0.6, 0.6, 0.6, 1.0)
}
