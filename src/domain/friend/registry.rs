// SPDX-License-Identifier: MPL-2.0
//! Insertion-ordered friend registry.

use super::{Friend, FriendId};

/// Base URL of the avatars used by the seed list.
const SEED_AVATAR_BASE: &str = "https://i.pravatar.cc/48";

/// Ordered collection of friends.
///
/// Uniqueness of ids is guaranteed by whoever creates the records, not by
/// the registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The three example friends every session starts with.
    #[must_use]
    pub fn seeded() -> Self {
        let seed = [
            ("118836", "Clark", -7.0),
            ("933372", "Sarah", 20.0),
            ("499476", "Anthony", 0.0),
        ];

        let friends = seed
            .into_iter()
            .map(|(id, name, balance)| {
                Friend::with_balance(
                    FriendId::from(id),
                    name,
                    format!("{SEED_AVATAR_BASE}?u={id}"),
                    balance,
                )
            })
            .collect();

        Self { friends }
    }

    /// Appends a friend at the end of the list.
    pub fn add(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Adds `delta` to the balance of the friend with `id`.
    ///
    /// Returns `false` when no friend matches; the registry is left untouched.
    pub fn adjust_balance(&mut self, id: &FriendId, delta: f64) -> bool {
        match self.friends.iter_mut().find(|friend| friend.id() == id) {
            Some(friend) => {
                friend.apply_delta(delta);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| friend.id() == id)
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn friend(id: &str) -> Friend {
        Friend::new(FriendId::from(id), id.to_uppercase(), "https://example.test")
    }

    #[test]
    fn seeded_registry_matches_example_friends() {
        let registry = FriendRegistry::seeded();
        let summary: Vec<_> = registry
            .iter()
            .map(|f| (f.name().to_string(), f.balance()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Clark".to_string(), -7.0),
                ("Sarah".to_string(), 20.0),
                ("Anthony".to_string(), 0.0),
            ]
        );
    }

    #[test]
    fn seeded_avatars_use_id_as_user_hint() {
        let registry = FriendRegistry::seeded();
        let clark = registry.get(&FriendId::from("118836")).expect("clark");
        assert_eq!(clark.image_url(), "https://i.pravatar.cc/48?u=118836");
    }

    #[test]
    fn add_appends_to_the_end() {
        let mut registry = FriendRegistry::seeded();
        registry.add(friend("zed"));

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.iter().last().map(Friend::name), Some("ZED"));
    }

    #[test]
    fn adjust_balance_only_touches_matching_friend() {
        let mut registry = FriendRegistry::seeded();
        let before = registry.clone();

        assert!(registry.adjust_balance(&FriendId::from("933372"), 30.0));

        for (after, original) in registry.iter().zip(before.iter()) {
            if after.id().as_str() == "933372" {
                assert_eq!(after.balance(), 50.0);
            } else {
                assert_eq!(after, original);
            }
        }
    }

    #[test]
    fn adjust_balance_with_unknown_id_is_noop() {
        let mut registry = FriendRegistry::seeded();
        let before = registry.clone();

        assert!(!registry.adjust_balance(&FriendId::from("missing"), 12.5));
        assert_eq!(registry, before);
    }

    proptest! {
        #[test]
        fn add_is_append_only(names in proptest::collection::vec("[a-z]{1,8}", 0..16)) {
            let mut registry = FriendRegistry::seeded();

            for (index, name) in names.iter().enumerate() {
                let before = registry.clone();
                let id = FriendId::new(format!("{index}-{name}"));
                registry.add(Friend::new(id, name.as_str(), "u"));

                prop_assert_eq!(registry.len(), before.len() + 1);
                for (kept, original) in registry.iter().zip(before.iter()) {
                    prop_assert_eq!(kept, original);
                }
            }
        }
    }
}
