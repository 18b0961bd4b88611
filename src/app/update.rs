// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every state transition of the registry and the selection happens here,
//! synchronously, inside a single message handler.

use super::{persistence, AddFriendPanel, Message, Ports};
use crate::domain::friend::{FriendId, FriendRegistry};
use crate::domain::selection::{Selection, SelectionChange};
use crate::error::Error;
use crate::infrastructure::pravatar;
use crate::ui::add_friend_form::{self, Event as AddFriendEvent};
use crate::ui::avatar::AvatarCache;
use crate::ui::friends_list;
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::split_bill_form::{self, Event as SplitBillEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub registry: &'a mut FriendRegistry,
    pub selection: &'a mut Selection,
    pub add_friend: &'a mut AddFriendPanel,
    pub split_bill: &'a mut Option<split_bill_form::State>,
    pub avatars: &'a mut AvatarCache,
    pub theme_mode: &'a mut ThemeMode,
    pub avatar_base_url: &'a str,
    pub fetch_avatars: bool,
    pub ports: &'a Ports,
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message, ctx.theme_mode) {
        HeaderEvent::ThemeChanged(mode) => {
            tracing::info!(?mode, "theme mode changed");
            persistence::persist_theme_mode(mode)
        }
    }
}

/// Selects (or deselects) a friend. Any selection change closes the
/// add-friend form and discards the current split draft.
pub fn handle_friends_list_message(
    ctx: &mut UpdateContext<'_>,
    message: friends_list::Message,
) -> Task<Message> {
    match message {
        friends_list::Message::Select(id) => {
            let change = ctx.selection.select(&id);
            *ctx.add_friend = AddFriendPanel::Closed;
            *ctx.split_bill = match change {
                SelectionChange::Selected => Some(split_bill_form::State::new(id)),
                SelectionChange::Cleared => None,
            };
            tracing::debug!(?change, "selection updated");
        }
    }
    Task::none()
}

pub fn handle_toggle_add_friend(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.add_friend = match ctx.add_friend {
        AddFriendPanel::Closed => {
            AddFriendPanel::Open(add_friend_form::State::new(ctx.avatar_base_url))
        }
        AddFriendPanel::Open(_) => AddFriendPanel::Closed,
    };
    Task::none()
}

pub fn handle_add_friend_message(
    ctx: &mut UpdateContext<'_>,
    message: add_friend_form::Message,
) -> Task<Message> {
    let AddFriendPanel::Open(form) = ctx.add_friend else {
        return Task::none();
    };

    let ports = add_friend_form::Ports {
        ids: ctx.ports.ids.as_ref(),
        avatars: ctx.ports.avatar_references.as_ref(),
    };

    match form.update(message, &ports) {
        AddFriendEvent::None => Task::none(),
        AddFriendEvent::FriendCreated(friend) => {
            tracing::info!(id = %friend.id(), name = friend.name(), "friend added");
            let task = if ctx.fetch_avatars {
                fetch_avatar(friend.id().clone(), friend.image_url().to_string())
            } else {
                Task::none()
            };
            ctx.registry.add(friend);
            *ctx.add_friend = AddFriendPanel::Closed;
            task
        }
    }
}

/// Applies a submitted split to the selected friend, then clears the
/// selection (which also drops the form).
pub fn handle_split_bill_message(
    ctx: &mut UpdateContext<'_>,
    message: split_bill_form::Message,
) -> Task<Message> {
    let Some(form) = ctx.split_bill.as_mut() else {
        return Task::none();
    };

    match form.update(message) {
        SplitBillEvent::None => {}
        SplitBillEvent::BalanceAdjusted(delta) => {
            if let Some(id) = ctx.selection.selected() {
                if ctx.registry.adjust_balance(id, delta) {
                    tracing::info!(%id, delta, "balance adjusted");
                } else {
                    tracing::warn!(%id, "selected friend missing from registry");
                }
            }
            ctx.selection.clear();
            *ctx.split_bill = None;
        }
    }
    Task::none()
}

pub fn handle_avatar_fetched(
    ctx: &mut UpdateContext<'_>,
    id: FriendId,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            tracing::debug!(%id, size = bytes.len(), "avatar fetched");
            ctx.avatars.insert(id, bytes);
        }
        Err(error) => tracing::warn!(%id, %error, "avatar fetch failed"),
    }
    Task::none()
}

/// Downloads an avatar in the background.
pub fn fetch_avatar(id: FriendId, url: String) -> Task<Message> {
    Task::perform(pravatar::fetch_avatar(url), move |result| {
        Message::AvatarFetched { id, result }
    })
}
