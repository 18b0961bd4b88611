// SPDX-License-Identifier: MPL-2.0
//! `iced_split` is a small bill-splitting companion built with the Iced GUI framework.
//!
//! It keeps an in-memory list of friends with running balances, lets the user
//! add friends and settle shared bills with one of them, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
