// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The layout is a header above two columns: the sidebar holds the friends
//! list, the optional add-friend form and its toggle button; the split-bill
//! form sits on the right whenever a friend is selected.

use super::{AddFriendPanel, Message};
use crate::domain::friend::FriendRegistry;
use crate::domain::selection::Selection;
use crate::i18n::fluent::I18n;
use crate::ui::add_friend_form;
use crate::ui::avatar::AvatarCache;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::friends_list;
use crate::ui::header;
use crate::ui::split_bill_form;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub registry: &'a FriendRegistry,
    pub selection: &'a Selection,
    pub add_friend: &'a AddFriendPanel,
    pub split_bill: Option<&'a split_bill_form::State>,
    pub avatars: &'a AvatarCache,
    pub theme_mode: ThemeMode,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let mut body = Row::new()
        .spacing(spacing::XL)
        .align_y(Alignment::Start)
        .push(view_sidebar(&ctx));

    if let Some(form) = view_split_bill(&ctx) {
        body = body.push(form);
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header_view)
        .push(scrollable(body).height(Length::Fill));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_sidebar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let list = friends_list::view(friends_list::ViewContext {
        i18n: ctx.i18n,
        registry: ctx.registry,
        selection: ctx.selection,
        avatars: ctx.avatars,
    })
    .map(Message::FriendsList);

    let mut sidebar = Column::new().spacing(spacing::MD).push(list);

    let toggle_key = match ctx.add_friend {
        AddFriendPanel::Closed => "add-friend-open-button",
        AddFriendPanel::Open(form) => {
            sidebar = sidebar.push(
                form.view(add_friend_form::ViewContext { i18n: ctx.i18n })
                    .map(Message::AddFriend),
            );
            "add-friend-close-button"
        }
    };

    let toggle = button(Text::new(ctx.i18n.tr(toggle_key)))
        .on_press(Message::ToggleAddFriend)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Container::new(sidebar.push(toggle))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .into()
}

fn view_split_bill<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let form = ctx.split_bill?;
    let friend = ctx.registry.get(form.friend_id())?;

    Some(
        form.view(split_bill_form::ViewContext {
            i18n: ctx.i18n,
            friend,
        })
        .map(Message::SplitBill),
    )
}
