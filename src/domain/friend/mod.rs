// SPDX-License-Identifier: MPL-2.0
//! Friend records and the ordered registry that owns them.
//!
//! The registry is append-only: friends are never removed or renamed, and
//! the only mutation after creation is a balance adjustment.

mod registry;

pub use registry::FriendRegistry;

use std::fmt;

// =============================================================================
// FriendId
// =============================================================================

/// Opaque, immutable identifier of a friend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    /// Wraps an identifier produced by an id generator.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FriendId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// BalanceStatus
// =============================================================================

/// Who owes whom, derived from a signed balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    /// The user owes the friend this (positive) amount.
    YouOwe(f64),
    /// The friend owes the user this (positive) amount.
    OwesYou(f64),
    /// Nothing is owed either way.
    Even,
}

impl BalanceStatus {
    /// Classifies a balance. Negative means the user owes the friend.
    #[must_use]
    pub fn from_balance(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceStatus::YouOwe(-balance)
        } else if balance > 0.0 {
            BalanceStatus::OwesYou(balance)
        } else {
            BalanceStatus::Even
        }
    }
}

// =============================================================================
// Friend
// =============================================================================

/// A friend the user splits bills with.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    id: FriendId,
    name: String,
    image_url: String,
    balance: f64,
}

impl Friend {
    /// Creates a friend with a zero balance.
    #[must_use]
    pub fn new(id: FriendId, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self::with_balance(id, name, image_url, 0.0)
    }

    /// Creates a friend with an existing balance (used for the seed list).
    #[must_use]
    pub fn with_balance(
        id: FriendId,
        name: impl Into<String>,
        image_url: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
            balance,
        }
    }

    #[must_use]
    pub fn id(&self) -> &FriendId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    #[must_use]
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    fn apply_delta(&mut self, delta: f64) {
        self.balance += delta;
    }
}
