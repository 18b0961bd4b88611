// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core bill-splitting rules with ZERO external dependencies.
//!
//! This module contains pure domain types and state transitions. It has no
//! dependencies on external crates (except `std`) so every rule can be unit
//! tested without a GUI.
//!
//! # Modules
//!
//! - [`friend`]: Friend records and the append-only [`FriendRegistry`](friend::FriendRegistry)
//! - [`selection`]: The single friend targeted for a split ([`Selection`](selection::Selection))
//! - [`bill`]: Split drafts and settlement ([`BillDraft`](bill::BillDraft), [`Payer`](bill::Payer))

pub mod bill;
pub mod friend;
pub mod selection;
