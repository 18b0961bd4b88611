// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Only preferences are written to disk. Friends and balances are not.

use super::Message;
use crate::config;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Persists the chosen theme mode to `settings.toml`.
///
/// Guarded during tests to keep isolation: unit tests exercise the config
/// functions directly with temporary directories.
pub fn persist_theme_mode(theme_mode: ThemeMode) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _warning) = config::load();
    cfg.general.theme_mode = theme_mode;

    if let Err(error) = config::save(&cfg) {
        tracing::warn!(%error, "failed to save config");
    }

    Task::none()
}
