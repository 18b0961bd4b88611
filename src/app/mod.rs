// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the friends list and the
//! two forms.
//!
//! The `App` struct owns the friend registry, the current selection, and the
//! form drafts. Component events are translated into registry and selection
//! operations here, alongside side effects such as avatar downloads and
//! preference persistence.

mod message;
pub mod paths;
mod persistence;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{AvatarReferenceGenerator, FriendIdGenerator};
use crate::config;
use crate::domain::friend::FriendRegistry;
use crate::domain::selection::Selection;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{QuerySuffixReference, UuidIdGenerator};
use crate::ui::add_friend_form;
use crate::ui::avatar::AvatarCache;
use crate::ui::split_bill_form;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Visibility of the add-friend form. The draft only exists while open.
#[derive(Debug, Clone, Default)]
pub enum AddFriendPanel {
    #[default]
    Closed,
    Open(add_friend_form::State),
}

impl AddFriendPanel {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Adapters used to mint ids and avatar references for new friends.
pub struct Ports {
    pub ids: Box<dyn FriendIdGenerator>,
    pub avatar_references: Box<dyn AvatarReferenceGenerator>,
}

impl Default for Ports {
    fn default() -> Self {
        Self {
            ids: Box::new(UuidIdGenerator),
            avatar_references: Box::new(QuerySuffixReference),
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    registry: FriendRegistry,
    selection: Selection,
    add_friend: AddFriendPanel,
    /// Present exactly when a friend is selected.
    split_bill: Option<split_bill_form::State>,
    avatars: AvatarCache,
    theme_mode: ThemeMode,
    avatar_base_url: String,
    fetch_avatars: bool,
    ports: Ports,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("friends", &self.registry.len())
            .field("selection", &self.selection)
            .field("add_friend_open", &self.add_friend.is_open())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            registry: FriendRegistry::seeded(),
            selection: Selection::None,
            add_friend: AddFriendPanel::Closed,
            split_bill: None,
            avatars: AvatarCache::new(),
            theme_mode: ThemeMode::System,
            avatar_base_url: config::DEFAULT_AVATAR_BASE_URL.to_string(),
            fetch_avatars: false,
            ports: Ports::default(),
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags, and
    /// starts avatar downloads for the seeded friends.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!(message = %i18n.tr(&key), "using default configuration");
        }

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            avatar_base_url: config.avatars.base_url_or_default(),
            fetch_avatars: config.avatars.fetch_enabled() && !flags.no_avatars,
            ..Self::default()
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            friends = app.registry.len(),
            fetch_avatars = app.fetch_avatars,
            "application started"
        );

        let task = if app.fetch_avatars {
            Task::batch(app.registry.iter().map(|friend| {
                update::fetch_avatar(friend.id().clone(), friend.image_url().to_string())
            }))
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            registry: &mut self.registry,
            selection: &mut self.selection,
            add_friend: &mut self.add_friend,
            split_bill: &mut self.split_bill,
            avatars: &mut self.avatars,
            theme_mode: &mut self.theme_mode,
            avatar_base_url: &self.avatar_base_url,
            fetch_avatars: self.fetch_avatars,
            ports: &self.ports,
        };

        match message {
            Message::Header(message) => update::handle_header_message(&mut ctx, message),
            Message::FriendsList(message) => update::handle_friends_list_message(&mut ctx, message),
            Message::ToggleAddFriend => update::handle_toggle_add_friend(&mut ctx),
            Message::AddFriend(message) => update::handle_add_friend_message(&mut ctx, message),
            Message::SplitBill(message) => update::handle_split_bill_message(&mut ctx, message),
            Message::AvatarFetched { id, result } => {
                update::handle_avatar_fetched(&mut ctx, id, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            registry: &self.registry,
            selection: &self.selection,
            add_friend: &self.add_friend,
            split_bill: self.split_bill.as_ref(),
            avatars: &self.avatars,
            theme_mode: self.theme_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::Payer;
    use crate::domain::friend::FriendId;
    use crate::error::Error;
    use crate::test_utils::{assert_abs_diff_eq, BALANCE_EPSILON};
    use crate::ui::friends_list;
    use crate::ui::header;
    use std::cell::Cell;

    const SARAH: &str = "933372";
    const CLARK: &str = "118836";

    fn balance_of(app: &App, id: &str) -> f64 {
        app.registry
            .get(&FriendId::from(id))
            .map(|friend| friend.balance())
            .unwrap_or(f64::NAN)
    }

    fn select(app: &mut App, id: &str) {
        let _ = app.update(Message::FriendsList(friends_list::Message::Select(
            FriendId::from(id),
        )));
    }

    fn split(app: &mut App, message: split_bill_form::Message) {
        let _ = app.update(Message::SplitBill(message));
    }

    struct FixedIds(Cell<u32>);

    impl FriendIdGenerator for FixedIds {
        fn next_id(&self) -> FriendId {
            let next = self.0.get() + 1;
            self.0.set(next);
            FriendId::new(format!("fixed-{next}"))
        }
    }

    #[test]
    fn default_app_starts_with_seeds_and_nothing_open() {
        let app = App::default();
        assert_eq!(app.registry.len(), 3);
        assert!(app.selection.is_none());
        assert!(!app.add_friend.is_open());
        assert!(app.split_bill.is_none());
        assert_eq!(app.title(), "IcedSplit");
    }

    #[test]
    fn selecting_a_friend_opens_the_split_form() {
        let mut app = App::default();
        select(&mut app, SARAH);

        assert!(app.selection.is_selected(&FriendId::from(SARAH)));
        let form = app.split_bill.as_ref().expect("split form should be open");
        assert_eq!(form.friend_id().as_str(), SARAH);
    }

    #[test]
    fn selecting_the_same_friend_again_clears_selection() {
        let mut app = App::default();
        select(&mut app, SARAH);
        select(&mut app, SARAH);

        assert!(app.selection.is_none());
        assert!(app.split_bill.is_none());
    }

    #[test]
    fn switching_friends_resets_the_draft() {
        let mut app = App::default();
        select(&mut app, SARAH);
        split(
            &mut app,
            split_bill_form::Message::TotalBillChanged("50".into()),
        );
        select(&mut app, CLARK);

        let form = app.split_bill.as_ref().expect("split form should be open");
        assert_eq!(form.friend_id().as_str(), CLARK);
        assert_eq!(form.total_input(), "");
        assert_eq!(form.draft().total_bill(), None);
    }

    #[test]
    fn toggle_opens_and_closes_the_add_form() {
        let mut app = App::default();
        let _ = app.update(Message::ToggleAddFriend);
        assert!(app.add_friend.is_open());
        let _ = app.update(Message::ToggleAddFriend);
        assert!(!app.add_friend.is_open());
    }

    #[test]
    fn opening_the_add_form_keeps_selection() {
        let mut app = App::default();
        select(&mut app, SARAH);
        let _ = app.update(Message::ToggleAddFriend);

        assert!(app.add_friend.is_open());
        assert!(app.selection.is_selected(&FriendId::from(SARAH)));
    }

    #[test]
    fn selecting_closes_the_add_form() {
        let mut app = App::default();
        let _ = app.update(Message::ToggleAddFriend);
        select(&mut app, CLARK);

        assert!(!app.add_friend.is_open());
    }

    #[test]
    fn deselecting_also_closes_the_add_form() {
        let mut app = App::default();
        select(&mut app, SARAH);
        let _ = app.update(Message::ToggleAddFriend);
        assert!(app.add_friend.is_open());

        select(&mut app, SARAH);

        assert!(app.selection.is_none());
        assert!(app.split_bill.is_none());
        assert!(!app.add_friend.is_open());
    }

    #[test]
    fn user_paying_credits_the_friend_share_and_clears_selection() {
        let mut app = App::default();
        select(&mut app, SARAH);
        split(
            &mut app,
            split_bill_form::Message::TotalBillChanged("50".into()),
        );
        split(
            &mut app,
            split_bill_form::Message::UserExpenseChanged("20".into()),
        );
        split(&mut app, split_bill_form::Message::Submit);

        assert_abs_diff_eq!(balance_of(&app, SARAH), 50.0, epsilon = BALANCE_EPSILON);
        assert!(app.selection.is_none());
        assert!(app.split_bill.is_none());
    }

    #[test]
    fn friend_paying_debits_the_user_share() {
        let mut app = App::default();
        select(&mut app, CLARK);
        split(
            &mut app,
            split_bill_form::Message::TotalBillChanged("30".into()),
        );
        split(
            &mut app,
            split_bill_form::Message::UserExpenseChanged("10".into()),
        );
        split(
            &mut app,
            split_bill_form::Message::PayerSelected(Payer::Friend),
        );
        split(&mut app, split_bill_form::Message::Submit);

        assert_abs_diff_eq!(balance_of(&app, CLARK), -17.0, epsilon = BALANCE_EPSILON);
        assert_abs_diff_eq!(balance_of(&app, SARAH), 20.0, epsilon = BALANCE_EPSILON);
    }

    #[test]
    fn incomplete_split_keeps_selection_and_balances() {
        let mut app = App::default();
        select(&mut app, SARAH);
        split(
            &mut app,
            split_bill_form::Message::TotalBillChanged("50".into()),
        );
        split(&mut app, split_bill_form::Message::Submit);

        assert_abs_diff_eq!(balance_of(&app, SARAH), 20.0, epsilon = BALANCE_EPSILON);
        assert!(app.selection.is_selected(&FriendId::from(SARAH)));
        assert!(app.split_bill.is_some());
    }

    #[test]
    fn adding_a_friend_appends_and_closes_the_form() {
        let mut app = App {
            ports: Ports {
                ids: Box::new(FixedIds(Cell::new(0))),
                avatar_references: Box::new(QuerySuffixReference),
            },
            ..App::default()
        };
        let _ = app.update(Message::ToggleAddFriend);
        let _ = app.update(Message::AddFriend(add_friend_form::Message::NameChanged(
            "Dana".into(),
        )));
        let _ = app.update(Message::AddFriend(add_friend_form::Message::Submit));

        assert_eq!(app.registry.len(), 4);
        assert!(!app.add_friend.is_open());

        let added = app.registry.iter().last().expect("friend was added");
        assert_eq!(added.id().as_str(), "fixed-1");
        assert_eq!(added.name(), "Dana");
        assert_eq!(added.image_url(), "https://i.pravatar.cc/48?=fixed-1");
        assert_eq!(added.balance(), 0.0);
    }

    #[test]
    fn adding_a_friend_with_avatar_fetching_enabled() {
        let mut app = App {
            fetch_avatars: true,
            ports: Ports {
                ids: Box::new(FixedIds(Cell::new(0))),
                avatar_references: Box::new(QuerySuffixReference),
            },
            ..App::default()
        };
        let _ = app.update(Message::ToggleAddFriend);
        let _ = app.update(Message::AddFriend(add_friend_form::Message::NameChanged(
            "Eve".into(),
        )));
        let _ = app.update(Message::AddFriend(add_friend_form::Message::Submit));

        assert_eq!(app.registry.len(), 4);
        assert!(!app.add_friend.is_open());
        assert!(app.avatars.is_empty());

        let added = app.registry.iter().last().expect("friend was added");
        assert_eq!(added.name(), "Eve");
        assert_eq!(added.image_url(), "https://i.pravatar.cc/48?=fixed-1");
    }

    #[test]
    fn adding_with_empty_name_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::ToggleAddFriend);
        let _ = app.update(Message::AddFriend(add_friend_form::Message::Submit));

        assert_eq!(app.registry.len(), 3);
        assert!(app.add_friend.is_open());
    }

    #[test]
    fn add_form_messages_are_ignored_while_closed() {
        let mut app = App::default();
        let _ = app.update(Message::AddFriend(add_friend_form::Message::NameChanged(
            "Dana".into(),
        )));
        let _ = app.update(Message::AddFriend(add_friend_form::Message::Submit));

        assert_eq!(app.registry.len(), 3);
    }

    #[test]
    fn header_cycles_the_theme_mode() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Message::CycleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::Header(header::Message::CycleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn fetched_avatars_are_cached_and_failures_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::AvatarFetched {
            id: FriendId::from(CLARK),
            result: Err(Error::Avatar("offline".into())),
        });
        assert!(app.avatars.is_empty());

        let _ = app.update(Message::AvatarFetched {
            id: FriendId::from(CLARK),
            result: Ok(vec![0x89, b'P', b'N', b'G']),
        });
        assert!(app.avatars.get(&FriendId::from(CLARK)).is_some());
    }
}
