// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Avatars**: Base avatar URL and fetching
//! - **Logging**: Fallback log filter

// ==========================================================================
// Avatar Defaults
// ==========================================================================

/// Avatar URL prefilled in the add-friend form.
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://i.pravatar.cc/48";

/// Whether avatars are downloaded for display.
pub const DEFAULT_FETCH_AVATARS: bool = true;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!DEFAULT_AVATAR_BASE_URL.is_empty());
    assert!(!DEFAULT_LOG_FILTER.is_empty());
};
