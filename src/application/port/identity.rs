// SPDX-License-Identifier: MPL-2.0
//! Friend id generation port.

use crate::domain::friend::FriendId;

/// Produces identifiers for newly created friends.
///
/// Implementations must never hand out the same id twice within a session;
/// the registry relies on it and performs no uniqueness check.
pub trait FriendIdGenerator {
    fn next_id(&self) -> FriendId;
}
