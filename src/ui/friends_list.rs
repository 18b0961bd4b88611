// SPDX-License-Identifier: MPL-2.0
//! Friends list: one row per friend with avatar, balance line and a
//! select/close toggle.

use crate::domain::friend::{BalanceStatus, Friend, FriendId, FriendRegistry};
use crate::domain::selection::Selection;
use crate::i18n::fluent::I18n;
use crate::ui::avatar::{self, AvatarCache};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub registry: &'a FriendRegistry,
    pub selection: &'a Selection,
    pub avatars: &'a AvatarCache,
}

/// Messages emitted by the list.
#[derive(Debug, Clone)]
pub enum Message {
    /// Select the friend, or deselect it if it already is.
    Select(FriendId),
}

/// Formats an amount the way balances are shown: no trailing zeros.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount}")
}

/// Localized "who owes whom" line for a friend.
#[must_use]
pub fn balance_line(i18n: &I18n, friend: &Friend) -> String {
    let name = friend.name();
    match friend.status() {
        BalanceStatus::YouOwe(amount) => i18n.tr_with_args(
            "friend-you-owe",
            &[("name", name), ("amount", &format_amount(amount))],
        ),
        BalanceStatus::OwesYou(amount) => i18n.tr_with_args(
            "friend-owes-you",
            &[("name", name), ("amount", &format_amount(amount))],
        ),
        BalanceStatus::Even => i18n.tr_with_args("friend-even", &[("name", name)]),
    }
}

/// Render the friends list.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    ctx.registry
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, friend| {
            column.push(build_row(&ctx, friend))
        })
        .width(Length::Fill)
        .into()
}

fn build_row<'a>(ctx: &ViewContext<'a>, friend: &'a Friend) -> Element<'a, Message> {
    let is_selected = ctx.selection.is_selected(friend.id());

    let balance = Text::new(balance_line(ctx.i18n, friend)).size(typography::BODY);
    let balance = match friend.status() {
        BalanceStatus::YouOwe(_) => balance.style(styles::text::debt),
        BalanceStatus::OwesYou(_) => balance.style(styles::text::credit),
        BalanceStatus::Even => balance.style(styles::text::secondary),
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(friend.name()).size(typography::TITLE_MD))
        .push(balance);

    let toggle_label = if is_selected {
        ctx.i18n.tr("friend-close-button")
    } else {
        ctx.i18n.tr("friend-select-button")
    };
    let toggle = button(Text::new(toggle_label))
        .on_press(Message::Select(friend.id().clone()))
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(avatar::view(ctx.avatars, friend))
        .push(details)
        .push(toggle);

    let container = Container::new(row).width(Length::Fill);
    if is_selected {
        container.style(styles::container::highlighted).into()
    } else {
        container.into()
    }
}
