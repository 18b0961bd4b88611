// SPDX-License-Identifier: MPL-2.0
//! Adapter for the pravatar.cc avatar service.
//!
//! Two concerns live here: deriving a per-friend avatar reference from a
//! base URL, and fetching avatar bytes for display. Neither is required for
//! balances to work; a failed fetch only means the placeholder badge stays.

use crate::application::port::AvatarReferenceGenerator;
use crate::domain::friend::FriendId;
use crate::error::{Error, Result};
use std::time::Duration;

/// Upper bound on a fetched avatar; anything larger is not a thumbnail.
const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("IcedSplit/", env!("CARGO_PKG_VERSION"));

/// Appends `?=<id>` to the base URL so friends sharing a base image get
/// distinct cache identities.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuerySuffixReference;

impl AvatarReferenceGenerator for QuerySuffixReference {
    fn reference(&self, base_url: &str, id: &FriendId) -> String {
        format!("{base_url}?={id}")
    }
}

/// Downloads the avatar at `url`.
pub async fn fetch_avatar(url: String) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Avatar(format!("HTTP status: {}", response.status())));
    }

    if let Some(length) = response.content_length() {
        if length > MAX_AVATAR_BYTES as u64 {
            return Err(Error::Avatar(format!("avatar too large ({length} bytes)")));
        }
    }

    let bytes = response.bytes().await?;
    if bytes.len() > MAX_AVATAR_BYTES {
        return Err(Error::Avatar(format!(
            "avatar too large ({} bytes)",
            bytes.len()
        )));
    }

    Ok(bytes.to_vec())
}
