// SPDX-License-Identifier: MPL-2.0
//! Localized message catalog.
//!
//! All user-facing strings are looked up by key in Fluent `.ftl` files that
//! are embedded at build time. Only `en-US` ships; `--i18n-dir` can point at
//! a directory of replacement catalogs.

pub mod fluent;
