// SPDX-License-Identifier: MPL-2.0
//! Text color styles for balance lines.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

pub fn debt(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).debt),
    }
}

pub fn credit(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).credit),
    }
}

pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}
