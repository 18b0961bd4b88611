// SPDX-License-Identifier: MPL-2.0
//! Avatar reference port.
//!
//! Avatars are hosted by an external image service and referenced by URL.
//! The core never validates those URLs; it only asks this port to derive a
//! per-friend reference from the base URL typed into the add-friend form.

use crate::domain::friend::FriendId;

/// Derives the avatar URL stored on a new friend.
pub trait AvatarReferenceGenerator {
    /// Returns the reference for `id`, given the user-provided `base_url`.
    fn reference(&self, base_url: &str, id: &FriendId) -> String;
}
