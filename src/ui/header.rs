// SPDX-License-Identifier: MPL-2.0
//! Header bar with the application name and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ThemeChanged(ThemeMode),
}

/// Process a header message against the current theme mode.
pub fn update(message: Message, theme_mode: &mut ThemeMode) -> Event {
    match message {
        Message::CycleTheme => {
            *theme_mode = theme_mode.next();
            Event::ThemeChanged(*theme_mode)
        }
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_LG)
        .width(Length::Fill);

    let mode = ctx.i18n.tr(ctx.theme_mode.i18n_key());
    let theme_button = button(Text::new(
        ctx.i18n.tr_with_args("header-theme-button", &[("mode", &mode)]),
    ))
    .on_press(Message::CycleTheme)
    .style(styles::button::subtle);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(theme_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
