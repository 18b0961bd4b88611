// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::friend::FriendId;
use crate::error::Error;
use crate::ui::add_friend_form;
use crate::ui::friends_list;
use crate::ui::header;
use crate::ui::split_bill_form;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    FriendsList(friends_list::Message),
    /// Open or close the add-friend form.
    ToggleAddFriend,
    AddFriend(add_friend_form::Message),
    SplitBill(split_bill_form::Message),
    /// Result of downloading a friend's avatar.
    AvatarFetched {
        id: FriendId,
        result: Result<Vec<u8>, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SPLIT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Skip avatar downloads regardless of the config file.
    pub no_avatars: bool,
}
