// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types. Infrastructure adapters implement
//! them; the add-friend form receives them as trait objects.
//!
//! # Available Ports
//!
//! - [`identity`]: Fresh friend identifiers
//! - [`avatar`]: Per-friend avatar references

pub mod avatar;
pub mod identity;

pub use avatar::AvatarReferenceGenerator;
pub use identity::FriendIdGenerator;
