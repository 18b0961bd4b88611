// SPDX-License-Identifier: MPL-2.0
use iced_split::application::port::{AvatarReferenceGenerator, FriendIdGenerator};
use iced_split::config::{self, Config, DEFAULT_AVATAR_BASE_URL};
use iced_split::domain::bill::{BillDraft, Payer};
use iced_split::domain::friend::{BalanceStatus, Friend, FriendId, FriendRegistry};
use iced_split::domain::selection::{Selection, SelectionChange};
use iced_split::i18n::fluent::I18n;
use iced_split::infrastructure::{QuerySuffixReference, UuidIdGenerator};
use iced_split::ui::friends_list::balance_line;
use iced_split::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_settle_bill_with_selected_friend() {
    let mut registry = FriendRegistry::seeded();
    let mut selection = Selection::default();
    let sarah = FriendId::from("933372");

    assert_eq!(selection.select(&sarah), SelectionChange::Selected);

    let mut draft = BillDraft::new();
    draft.set_total_bill(Some(50.0));
    assert!(draft.set_user_expense(Some(20.0)));
    draft.set_payer(Payer::User);

    let delta = draft.settlement().expect("draft is complete");
    let id = selection.selected().cloned().expect("friend selected");
    assert!(registry.adjust_balance(&id, delta));
    selection.clear();

    let updated = registry.get(&sarah).expect("seeded friend");
    assert_eq!(updated.balance(), 50.0);
    assert_eq!(updated.status(), BalanceStatus::OwesYou(50.0));
    assert!(selection.is_none());
}

#[test]
fn test_new_friend_through_default_adapters() {
    let ids = UuidIdGenerator;
    let references = QuerySuffixReference;
    let mut registry = FriendRegistry::seeded();

    let id = ids.next_id();
    let image_url = references.reference(DEFAULT_AVATAR_BASE_URL, &id);
    registry.add(Friend::new(id.clone(), "Dana", image_url.clone()));

    assert_eq!(registry.len(), 4);
    let last = registry.iter().last().expect("friend was added");
    assert_eq!(last.id(), &id);
    assert_eq!(last.balance(), 0.0);
    assert!(image_url.starts_with(DEFAULT_AVATAR_BASE_URL));
    assert!(image_url.ends_with(id.as_str()));
}

#[test]
fn test_config_round_trip_and_i18n() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    initial.general.theme_mode = ThemeMode::Dark;
    initial.avatars.fetch = Some(false);
    config::save_to_path(&initial, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert!(!loaded.avatars.fetch_enabled());
    assert_eq!(loaded.avatars.base_url_or_default(), DEFAULT_AVATAR_BASE_URL);

    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");

    let registry = FriendRegistry::seeded();
    let lines: Vec<String> = registry
        .iter()
        .map(|friend| balance_line(&i18n, friend))
        .collect();
    assert_eq!(
        lines,
        vec![
            "You owe Clark 7€".to_string(),
            "Sarah owes you 20€".to_string(),
            "You and Anthony are even".to_string(),
        ]
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_invalid_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(warning.as_deref(), Some(config::LOAD_ERROR_KEY));
    assert_eq!(loaded.general.theme_mode, ThemeMode::System);
}
