// SPDX-License-Identifier: MPL-2.0
//! Random UUID friend ids.

use crate::application::port::FriendIdGenerator;
use crate::domain::friend::FriendId;
use uuid::Uuid;

/// Generates version 4 (random) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl FriendIdGenerator for UuidIdGenerator {
    fn next_id(&self) -> FriendId {
        FriendId::new(Uuid::new_v4().to_string())
    }
}
