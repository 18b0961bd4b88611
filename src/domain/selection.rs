// SPDX-License-Identifier: MPL-2.0
//! Which friend, if any, is targeted for a bill split.

use crate::domain::friend::FriendId;

/// Current selection. At most one friend is selected at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Friend(FriendId),
}

/// Result of a [`Selection::select`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The friend is now selected (it was not before).
    Selected,
    /// The friend was already selected and got deselected.
    Cleared,
}

impl Selection {
    /// Selects `id`, or clears the selection when `id` is already selected.
    pub fn select(&mut self, id: &FriendId) -> SelectionChange {
        if self.is_selected(id) {
            *self = Selection::None;
            SelectionChange::Cleared
        } else {
            *self = Selection::Friend(id.clone());
            SelectionChange::Selected
        }
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&FriendId> {
        match self {
            Selection::None => None,
            Selection::Friend(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected() == Some(id)
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}
