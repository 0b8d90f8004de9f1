//! Starred-coin watchlist.
//!
//! The watchlist is a set of coin identifiers persisted as a single named
//! entry (a JSON array). Durable storage is the source of truth: readers
//! never patch their copy, they subscribe to [`Watchlist::subscribe`] and
//! reload the full set with [`Watchlist::load_all`] whenever a change
//! signal arrives.

mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::error::Result;
use std::collections::BTreeSet;
use tokio::sync::broadcast;

/// Name of the durable entry holding the starred coin ids.
pub const WATCHLIST_KEY: &str = "starredCoins";

const SIGNAL_CAPACITY: usize = 16;

/// Payload-free notification that the durable watchlist was rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchlistChanged;

/// Persisted set of starred coin ids with an explicit subscriber list.
pub struct Watchlist {
    storage: Box<dyn Storage>,
    key: String,
    changes: broadcast::Sender<WatchlistChanged>,
}

impl std::fmt::Debug for Watchlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchlist")
            .field("key", &self.key)
            .field("subscribers", &self.changes.receiver_count())
            .finish()
    }
}

impl Watchlist {
    /// Create a watchlist stored under [`WATCHLIST_KEY`].
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self::with_key(storage, WATCHLIST_KEY)
    }

    /// Create a watchlist stored under a custom entry name.
    pub fn with_key(storage: impl Storage + 'static, key: impl Into<String>) -> Self {
        let (changes, _) = broadcast::channel(SIGNAL_CAPACITY);
        Self {
            storage: Box::new(storage),
            key: key.into(),
            changes,
        }
    }

    /// Register a new subscriber. Every successful [`toggle`](Self::toggle)
    /// delivers one [`WatchlistChanged`] to each live receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<WatchlistChanged> {
        self.changes.subscribe()
    }

    /// Read the full durable set.
    ///
    /// A missing entry, an unreadable store or an unparseable value all
    /// produce the empty set.
    pub fn load_all(&self) -> BTreeSet<String> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeSet::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read watchlist");
                return BTreeSet::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding unparseable watchlist");
                BTreeSet::new()
            }
        }
    }

    /// Whether `id` is currently starred.
    pub fn is_member(&self, id: &str) -> bool {
        self.load_all().contains(id)
    }

    /// Flip membership of `id`, persist the whole set and notify subscribers.
    ///
    /// Returns the new membership of `id`.
    pub fn toggle(&self, id: &str) -> Result<bool> {
        let mut ids = self.load_all();
        let starred = if ids.remove(id) {
            false
        } else {
            ids.insert(id.to_string());
            true
        };

        let raw = serde_json::to_string(&ids)?;
        self.storage.set(&self.key, &raw)?;

        // No live receivers is not an error.
        let _ = self.changes.send(WatchlistChanged);

        tracing::info!(id, starred, total = ids.len(), "watchlist updated");
        Ok(starred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio::sync::broadcast::error::TryRecvError;

    fn set_of(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_on_first_access() {
        let watchlist = Watchlist::new(MemoryStorage::new());
        assert!(watchlist.load_all().is_empty());
        assert!(!watchlist.is_member("bitcoin"));
    }

    #[test]
    fn test_toggle_adds_to_empty_watchlist() {
        let watchlist = Watchlist::new(MemoryStorage::new());

        assert!(watchlist.toggle("bitcoin").unwrap());
        assert!(watchlist.is_member("bitcoin"));
        assert_eq!(watchlist.load_all(), set_of(&["bitcoin"]));
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let watchlist = Watchlist::new(MemoryStorage::new());

        watchlist.toggle("bitcoin").unwrap();
        assert!(!watchlist.toggle("bitcoin").unwrap());
        assert!(watchlist.load_all().is_empty());

        watchlist.toggle("ethereum").unwrap();
        for id in ["bitcoin", "ethereum", "solana"] {
            let before = watchlist.is_member(id);
            watchlist.toggle(id).unwrap();
            watchlist.toggle(id).unwrap();
            assert_eq!(watchlist.is_member(id), before, "membership of {id}");
        }
    }

    #[test]
    fn test_storage_holds_full_set() {
        let watchlist = Watchlist::new(MemoryStorage::new());
        watchlist.toggle("solana").unwrap();
        watchlist.toggle("bitcoin").unwrap();

        let raw = watchlist.storage.get(WATCHLIST_KEY).unwrap().unwrap();
        let stored: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, vec!["bitcoin".to_string(), "solana".to_string()]);
    }

    #[test]
    fn test_corrupted_entry_loads_as_empty() {
        let watchlist = Watchlist::new(MemoryStorage::with_entry(WATCHLIST_KEY, "{not json"));
        assert!(watchlist.load_all().is_empty());
        assert!(!watchlist.is_member("bitcoin"));
    }

    #[test]
    fn test_wrong_shape_loads_as_empty() {
        let watchlist = Watchlist::new(MemoryStorage::with_entry(WATCHLIST_KEY, "{\"a\": 1}"));
        assert!(watchlist.load_all().is_empty());
    }

    #[test]
    fn test_toggle_recovers_from_corrupted_entry() {
        let watchlist = Watchlist::new(MemoryStorage::with_entry(WATCHLIST_KEY, "garbage"));
        watchlist.toggle("bitcoin").unwrap();
        assert_eq!(watchlist.load_all(), set_of(&["bitcoin"]));
    }

    #[test]
    fn test_duplicate_ids_in_storage_collapse() {
        let watchlist = Watchlist::new(MemoryStorage::with_entry(
            WATCHLIST_KEY,
            "[\"bitcoin\", \"bitcoin\", \"dogecoin\"]",
        ));
        assert_eq!(watchlist.load_all(), set_of(&["bitcoin", "dogecoin"]));
    }

    #[test]
    fn test_toggle_without_subscribers_succeeds() {
        let watchlist = Watchlist::new(MemoryStorage::new());
        tokio_test::assert_ok!(watchlist.toggle("bitcoin"));
    }

    #[test]
    fn test_every_subscriber_is_signalled() {
        let watchlist = Watchlist::new(MemoryStorage::new());
        let mut table = watchlist.subscribe();
        let mut strip = watchlist.subscribe();

        watchlist.toggle("bitcoin").unwrap();

        assert_eq!(table.try_recv(), Ok(WatchlistChanged));
        assert_eq!(strip.try_recv(), Ok(WatchlistChanged));
        assert_eq!(table.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_toggle_in_one_context_reloads_another() {
        let watchlist = Arc::new(Watchlist::new(MemoryStorage::new()));

        // Second context keeps its own copy and only sees the shared store.
        let reader = Arc::clone(&watchlist);
        let mut changes = reader.subscribe();
        let observer = tokio::spawn(async move {
            changes.recv().await.unwrap();
            reader.load_all()
        });

        tokio::task::yield_now().await;
        watchlist.toggle("bitcoin").unwrap();

        let observed = observer.await.unwrap();
        assert_eq!(observed, set_of(&["bitcoin"]));
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let watchlist = Watchlist::with_key(MemoryStorage::new(), "other");
        watchlist.toggle("bitcoin").unwrap();
        assert!(watchlist.storage.get(WATCHLIST_KEY).unwrap().is_none());
        assert!(watchlist.is_member("bitcoin"));
    }
}
