//! Change notifications
//!
//! Listeners run synchronously on the mutating caller's thread once the
//! in-memory state has changed. Rolled-back mutations are never reported.

use crate::game::GameId;

/// What changed in a [`ClientStateStore`](crate::ClientStateStore)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    GamesReplaced { count: usize },
    FavoriteChanged { game_id: GameId, favorite: bool },
    ReviewAppended { game_id: GameId },
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

pub(crate) type Listener = Box<dyn FnMut(&StoreEvent)>;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &StoreEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
