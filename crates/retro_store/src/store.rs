//! Client state store
//!
//! [`ClientStateStore`] is the single owner of three collections:
//!
//! - **games**: the last list fetched from the API, replaced wholesale and
//!   never persisted
//! - **favorites**: a set of game ids, persisted under [`FAVORITES_KEY`] as a
//!   JSON array
//! - **reviews**: game id → review texts (newest first), persisted under
//!   [`REVIEWS_KEY`] as a JSON object
//!
//! Every mutation that touches a persisted collection writes the whole
//! collection back before returning. Corrupt or missing persisted values load
//! as empty; write failures propagate to the caller.
//!
//! The store is single-writer: it takes `&mut self` for every mutation and
//! is meant to be owned by one coordinating component.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::events::{Listeners, StoreEvent, SubscriptionId};
use crate::game::{Game, GameId};
use crate::persistence::{KeyValueStore, FAVORITES_KEY, REVIEWS_KEY};
use crate::sections::{sections_by_year, GameSection};

/// What happens to an in-memory mutation whose persistence write failed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteFailurePolicy {
    /// Keep the mutation; memory and storage differ until the next
    /// successful write of that collection.
    #[default]
    #[serde(rename = "keep")]
    KeepInMemory,
    /// Undo the mutation before returning the error.
    #[serde(rename = "rollback")]
    RollBack,
}

/// Store construction options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub write_failure: WriteFailurePolicy,
}

impl StoreOptions {
    pub fn write_failure(mut self, policy: WriteFailurePolicy) -> Self {
        self.write_failure = policy;
        self
    }
}

/// Games cache plus persisted favorites and reviews
pub struct ClientStateStore<S: KeyValueStore> {
    persistence: S,
    options: StoreOptions,
    games: Vec<Game>,
    favorites: IndexSet<GameId>,
    reviews: BTreeMap<GameId, Vec<String>>,
    listeners: Listeners,
}

/// Read and decode one persisted value; anything unusable is `None`.
fn load_json<T: DeserializeOwned>(persistence: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match persistence.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!("ClientStateStore: reading `{}` failed, starting empty: {}", key, err);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("ClientStateStore: `{}` is not valid, starting empty: {}", key, err);
            None
        }
    }
}

impl<S: KeyValueStore> ClientStateStore<S> {
    /// Load persisted favorites and reviews with default options
    pub fn open(persistence: S) -> Self {
        Self::open_with(persistence, StoreOptions::default())
    }

    /// Load persisted favorites and reviews.
    ///
    /// Never fails: a missing, unreadable or malformed value yields an empty
    /// collection for that key only.
    pub fn open_with(persistence: S, options: StoreOptions) -> Self {
        let favorites: IndexSet<GameId> = load_json::<Vec<GameId>>(&persistence, FAVORITES_KEY)
            .unwrap_or_default()
            .into_iter()
            .collect();
        let reviews: BTreeMap<GameId, Vec<String>> =
            load_json(&persistence, REVIEWS_KEY).unwrap_or_default();

        debug!(
            "ClientStateStore::open - {} favorites, reviews for {} games, {:?}",
            favorites.len(),
            reviews.len(),
            options.write_failure
        );

        Self {
            persistence,
            options,
            games: Vec::new(),
            favorites,
            reviews,
            listeners: Listeners::default(),
        }
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    // ========== Games ==========

    /// Replace the games collection wholesale
    pub fn replace_games(&mut self, games: Vec<Game>) {
        debug!(
            "ClientStateStore::replace_games - {} -> {} games",
            self.games.len(),
            games.len()
        );
        self.games = games;
        self.listeners.emit(&StoreEvent::GamesReplaced {
            count: self.games.len(),
        });
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// First game with `id` in the current collection
    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Games grouped by release year; optionally favorites only
    pub fn sections(&self, favorites_only: bool) -> Vec<GameSection<'_>> {
        sections_by_year(&self.games, |id| !favorites_only || self.favorites.contains(&id))
    }

    // ========== Favorites ==========

    pub fn is_favorite(&self, game_id: GameId) -> bool {
        self.favorites.contains(&game_id)
    }

    /// Favorite ids in the order they were added
    pub fn favorites(&self) -> impl Iterator<Item = GameId> + '_ {
        self.favorites.iter().copied()
    }

    /// Set (`Some`) or flip (`None`) favorite membership.
    ///
    /// Returns `Ok(false)` without writing anything when membership would
    /// not change. Otherwise updates the set, persists it, and returns
    /// `Ok(true)`.
    pub fn toggle_favorite(
        &mut self,
        game_id: GameId,
        value: Option<bool>,
    ) -> Result<bool, StoreError> {
        let current = self.favorites.contains(&game_id);
        let favorite = value.unwrap_or(!current);
        if favorite == current {
            return Ok(false);
        }

        let snapshot = self.rollback_snapshot(|store| store.favorites.clone());
        if favorite {
            self.favorites.insert(game_id);
        } else {
            self.favorites.shift_remove(&game_id);
        }

        let event = StoreEvent::FavoriteChanged { game_id, favorite };
        if let Err(err) = self.persist_favorites() {
            warn!(
                "ClientStateStore::toggle_favorite({}) - write failed: {}",
                game_id, err
            );
            match snapshot {
                Some(previous) => self.favorites = previous,
                // The set did change, so observers still hear about it.
                None => self.listeners.emit(&event),
            }
            return Err(err);
        }

        debug!(
            "ClientStateStore::toggle_favorite - {} favorite={}",
            game_id, favorite
        );
        self.listeners.emit(&event);
        Ok(true)
    }

    // ========== Reviews ==========

    /// Reviews for a game, newest first (empty if none)
    pub fn reviews_for(&self, game_id: GameId) -> &[String] {
        self.reviews
            .get(&game_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All reviews keyed by game id
    pub fn reviews(&self) -> &BTreeMap<GameId, Vec<String>> {
        &self.reviews
    }

    /// Prepend a review for `game_id` and persist all reviews.
    ///
    /// The text is stored as given; validating it is up to the caller.
    pub fn append_review(
        &mut self,
        game_id: GameId,
        text: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.reviews
            .entry(game_id)
            .or_default()
            .insert(0, text.into());

        if let Err(err) = self.persist_reviews() {
            warn!(
                "ClientStateStore::append_review({}) - write failed: {}",
                game_id, err
            );
            match self.options.write_failure {
                WriteFailurePolicy::RollBack => self.undo_review(game_id),
                WriteFailurePolicy::KeepInMemory => {
                    self.listeners.emit(&StoreEvent::ReviewAppended { game_id })
                }
            }
            return Err(err);
        }

        debug!(
            "ClientStateStore::append_review - {} now has {} reviews",
            game_id,
            self.reviews_for(game_id).len()
        );
        self.listeners
            .emit(&StoreEvent::ReviewAppended { game_id });
        Ok(())
    }

    // ========== Listeners ==========

    /// Register a listener for state changes.
    ///
    /// A mutation whose write failed is still reported when the change is
    /// kept in memory, and not reported when it is rolled back.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    // ========== Persistence ==========

    pub fn persistence(&self) -> &S {
        &self.persistence
    }

    /// Mutable access to the backend, e.g. to inject failures in tests
    pub fn persistence_mut(&mut self) -> &mut S {
        &mut self.persistence
    }

    pub fn into_persistence(self) -> S {
        self.persistence
    }

    fn rollback_snapshot<T>(&self, take: impl FnOnce(&Self) -> T) -> Option<T> {
        (self.options.write_failure == WriteFailurePolicy::RollBack).then(|| take(self))
    }

    fn undo_review(&mut self, game_id: GameId) {
        if let Some(list) = self.reviews.get_mut(&game_id) {
            if !list.is_empty() {
                list.remove(0);
            }
            if list.is_empty() {
                self.reviews.remove(&game_id);
            }
        }
    }

    fn persist_favorites(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.favorites)?;
        self.persistence.set(FAVORITES_KEY, &json)?;
        Ok(())
    }

    fn persist_reviews(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.reviews)?;
        self.persistence.set(REVIEWS_KEY, &json)?;
        Ok(())
    }
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for ClientStateStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientStateStore")
            .field("persistence", &self.persistence)
            .field("options", &self.options)
            .field("games", &self.games.len())
            .field("favorites", &self.favorites)
            .field("reviews", &self.reviews)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ReleaseDate;
    use crate::persistence::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store() -> ClientStateStore<MemoryStore> {
        ClientStateStore::open(MemoryStore::new())
    }

    #[test]
    fn toggle_without_value_flips_membership() {
        let mut store = store();

        assert!(store.toggle_favorite(3, None).unwrap());
        assert!(store.is_favorite(3));
        assert!(store.toggle_favorite(3, None).unwrap());
        assert!(!store.is_favorite(3));
        assert_eq!(store.persistence().writes(), 2);
        assert_eq!(store.persistence().value(FAVORITES_KEY), Some("[]"));
    }

    #[test]
    fn explicit_false_on_absent_id_is_a_noop() {
        let mut store = store();
        assert!(!store.toggle_favorite(9, Some(false)).unwrap());
        assert_eq!(store.persistence().writes(), 0);
    }

    #[test]
    fn favorites_persist_in_insertion_order() {
        let mut store = store();
        for id in [5, 1, 3] {
            store.toggle_favorite(id, Some(true)).unwrap();
        }
        store.toggle_favorite(1, Some(false)).unwrap();

        assert_eq!(store.favorites().collect::<Vec<_>>(), vec![5, 3]);
        assert_eq!(store.persistence().value(FAVORITES_KEY), Some("[5,3]"));
    }

    #[test]
    fn reviews_persist_as_object_keyed_by_id_string() {
        let mut store = store();
        store.append_review(7, "great").unwrap();
        store.append_review(7, "ok").unwrap();

        assert_eq!(
            store.persistence().value(REVIEWS_KEY),
            Some(r#"{"7":["ok","great"]}"#)
        );
    }

    #[test]
    fn duplicate_ids_in_storage_collapse() {
        let store = ClientStateStore::open(
            MemoryStore::new().with_value(FAVORITES_KEY, "[4, 4, 2]"),
        );
        assert_eq!(store.favorites().collect::<Vec<_>>(), vec![4, 2]);
    }

    #[test]
    fn wrong_element_types_load_as_empty() {
        let store = ClientStateStore::open(
            MemoryStore::new()
                .with_value(FAVORITES_KEY, r#"["1", "2"]"#)
                .with_value(REVIEWS_KEY, r#"{"7": "great"}"#),
        );
        assert_eq!(store.favorites().count(), 0);
        assert!(store.reviews().is_empty());
    }

    #[test]
    fn listeners_see_changes_but_not_noops() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = store();
        let sink = Rc::clone(&seen);
        let id = store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.replace_games(vec![Game::new(1, "Pong", ReleaseDate::year(1972))]);
        store.toggle_favorite(1, Some(true)).unwrap();
        store.toggle_favorite(1, Some(true)).unwrap();
        store.append_review(1, "classic").unwrap();

        assert!(store.unsubscribe(id));
        store.replace_games(Vec::new());

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreEvent::GamesReplaced { count: 1 },
                StoreEvent::FavoriteChanged {
                    game_id: 1,
                    favorite: true
                },
                StoreEvent::ReviewAppended { game_id: 1 },
            ]
        );
    }

    fn recording(store: &mut ClientStateStore<MemoryStore>) -> Rc<RefCell<Vec<StoreEvent>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        seen
    }

    #[test]
    fn failed_write_still_notifies_when_mutation_is_kept() {
        let mut store = store();
        let seen = recording(&mut store);
        store.persistence_mut().fail_writes(true);

        assert!(store.toggle_favorite(5, None).is_err());
        assert!(store.append_review(5, "lost").is_err());

        assert!(store.is_favorite(5));
        assert_eq!(store.reviews_for(5), ["lost"]);
        assert_eq!(
            *seen.borrow(),
            vec![
                StoreEvent::FavoriteChanged {
                    game_id: 5,
                    favorite: true
                },
                StoreEvent::ReviewAppended { game_id: 5 },
            ]
        );
    }

    #[test]
    fn failed_write_is_silent_when_rolled_back() {
        let options = StoreOptions::default().write_failure(WriteFailurePolicy::RollBack);
        let mut store = ClientStateStore::open_with(MemoryStore::new(), options);
        let seen = recording(&mut store);
        store.persistence_mut().fail_writes(true);

        assert!(store.toggle_favorite(5, None).is_err());
        assert!(store.append_review(5, "lost").is_err());

        assert!(!store.is_favorite(5));
        assert!(store.reviews_for(5).is_empty());
        assert!(seen.borrow().is_empty());
    }
}
