// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `Event` for the parent where it has one, and a
//! `view` taking a `ViewContext`.
//!
//! # Components
//!
//! - [`header`] - Application name and theme toggle
//! - [`friends_list`] - Friends with their balances and select buttons
//! - [`add_friend_form`] - Name and avatar URL form for new friends
//! - [`split_bill_form`] - Bill split for the selected friend
//! - [`avatar`] - Fetched avatar images and placeholder badges
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod add_friend_form;
pub mod avatar;
pub mod design_tokens;
pub mod friends_list;
pub mod header;
pub mod split_bill_form;
pub mod styles;
pub mod theming;
