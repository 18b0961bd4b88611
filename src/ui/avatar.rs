// SPDX-License-Identifier: MPL-2.0
//! Fetched avatar thumbnails and their placeholder badge.

use crate::domain::friend::{Friend, FriendId};
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// In-memory avatar images keyed by friend.
#[derive(Debug, Clone, Default)]
pub struct AvatarCache {
    handles: HashMap<FriendId, Handle>,
}

impl AvatarCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores encoded image bytes for a friend, replacing any previous image.
    pub fn insert(&mut self, id: FriendId, bytes: Vec<u8>) {
        self.handles.insert(id, Handle::from_bytes(bytes));
    }

    #[must_use]
    pub fn get(&self, id: &FriendId) -> Option<&Handle> {
        self.handles.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// First letter of the name, upper-cased, for the placeholder badge.
#[must_use]
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Renders the friend's avatar, or a round initial badge when none is cached.
pub fn view<'a, M: 'a>(cache: &'a AvatarCache, friend: &'a Friend) -> Element<'a, M> {
    match cache.get(friend.id()) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::AVATAR))
            .height(Length::Fixed(sizing::AVATAR))
            .into(),
        None => Container::new(Text::new(initial(friend.name())).size(typography::TITLE_MD))
            .width(Length::Fixed(sizing::AVATAR))
            .height(Length::Fixed(sizing::AVATAR))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::avatar_badge)
            .into(),
    }
}
