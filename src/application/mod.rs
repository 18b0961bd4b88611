// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the domain and its collaborators.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives ports as `&dyn Trait`

pub mod port;
