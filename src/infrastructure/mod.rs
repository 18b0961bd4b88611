// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`uuid_ids`]: Random UUID friend ids (implements [`FriendIdGenerator`])
//! - [`pravatar`]: Avatar references and fetching (implements [`AvatarReferenceGenerator`])
//!
//! [`FriendIdGenerator`]: crate::application::port::FriendIdGenerator
//! [`AvatarReferenceGenerator`]: crate::application::port::AvatarReferenceGenerator

pub mod pravatar;
pub mod uuid_ids;

pub use pravatar::QuerySuffixReference;
pub use uuid_ids::UuidIdGenerator;
