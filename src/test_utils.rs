// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and process-environment isolation.

pub use approx::assert_abs_diff_eq;

use std::sync::{Mutex, MutexGuard};

/// Default epsilon for balance comparisons.
pub const BALANCE_EPSILON: f64 = 1e-9;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Serializes tests that read or write process environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
