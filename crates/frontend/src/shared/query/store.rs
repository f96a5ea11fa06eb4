use std::collections::{BTreeMap, BTreeSet};

use super::tags::CacheTag;

pub type SubscriberId = u64;

/// Coarse phase of a query, derived from [`QueryState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never requested
    Idle,
    /// First fetch (or a retry after an error) in flight, nothing to show yet
    Loading,
    Success,
    Error,
}

/// Snapshot of one cached query.
///
/// `data` keeps the last successful result across refetches and failures;
/// `is_fetching` is true for every in-flight request, first or not.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_fetching: bool,
    pub is_stale: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
            is_stale: false,
        }
    }
}

impl<T> QueryState<T> {
    pub fn status(&self) -> QueryStatus {
        match (&self.error, &self.data, self.is_fetching) {
            (Some(_), _, false) => QueryStatus::Error,
            (_, Some(_), _) => QueryStatus::Success,
            (_, None, true) => QueryStatus::Loading,
            (_, None, false) => QueryStatus::Idle,
        }
    }

    /// Convert the payload, keeping the flags
    pub fn and_then_data<U>(self, f: impl FnOnce(T) -> Option<U>) -> QueryState<U> {
        QueryState {
            data: self.data.and_then(f),
            error: self.error,
            is_fetching: self.is_fetching,
            is_stale: self.is_stale,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry<T> {
    state: QueryState<T>,
    tags: Vec<CacheTag>,
    subscribers: BTreeSet<SubscriberId>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            state: QueryState::default(),
            tags: Vec::new(),
            subscribers: BTreeSet::new(),
        }
    }
}

/// Cached query results keyed by `K`, with a reverse index from cache tags to
/// the keys that provided them.
///
/// The store never performs I/O. Callers ask [`QueryStore::needs_fetch`],
/// bracket the request with [`QueryStore::begin_fetch`] and
/// [`QueryStore::complete`], and feed mutation results to
/// [`QueryStore::invalidate`], which answers with the observed keys to refetch.
#[derive(Debug, Clone)]
pub struct QueryStore<K, T> {
    entries: BTreeMap<K, Entry<T>>,
    tag_index: BTreeMap<CacheTag, BTreeSet<K>>,
    next_subscriber: SubscriberId,
}

impl<K, T> Default for QueryStore<K, T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            tag_index: BTreeMap::new(),
            next_subscriber: 0,
        }
    }
}

impl<K: Ord + Clone, T: Clone> QueryStore<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `key`. A failed query is retried for the new observer.
    pub fn subscribe(&mut self, key: K) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        let entry = self.entries.entry(key).or_default();
        if entry.state.error.is_some() && !entry.state.is_fetching {
            entry.state.is_stale = true;
        }
        entry.subscribers.insert(id);
        id
    }

    /// Stop observing `key`. A stale or failed entry left without observers
    /// is dropped; fresh data stays for the next mount.
    pub fn unsubscribe(&mut self, key: &K, id: SubscriberId) {
        let Some(entry) = self.entries.get_mut(key) else {
            return;
        };
        entry.subscribers.remove(&id);
        let state = &entry.state;
        if entry.subscribers.is_empty()
            && !state.is_fetching
            && (state.is_stale || state.error.is_some())
        {
            self.remove(key);
        }
    }

    fn remove(&mut self, key: &K) {
        let Some(entry) = self.entries.remove(key) else {
            return;
        };
        for tag in entry.tags {
            if let Some(keys) = self.tag_index.get_mut(&tag) {
                keys.remove(key);
                if keys.is_empty() {
                    self.tag_index.remove(&tag);
                }
            }
        }
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| !e.subscribers.is_empty())
    }

    pub fn state(&self, key: &K) -> Option<&QueryState<T>> {
        self.entries.get(key).map(|e| &e.state)
    }

    pub fn data(&self, key: &K) -> Option<&T> {
        self.state(key).and_then(|s| s.data.as_ref())
    }

    pub fn tags(&self, key: &K) -> &[CacheTag] {
        self.entries.get(key).map(|e| e.tags.as_slice()).unwrap_or(&[])
    }

    /// Observed, not in flight, and either never fetched or stale
    pub fn needs_fetch(&self, key: &K) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return false;
        };
        let state = &entry.state;
        let never_fetched = state.data.is_none() && state.error.is_none();
        !entry.subscribers.is_empty() && !state.is_fetching && (never_fetched || state.is_stale)
    }

    /// Mark a request as in flight. Returns false if one already is.
    pub fn begin_fetch(&mut self, key: &K) -> bool {
        let entry = self.entries.entry(key.clone()).or_default();
        if entry.state.is_fetching {
            return false;
        }
        entry.state.is_fetching = true;
        entry.state.is_stale = false;
        true
    }

    /// Record the outcome of a request started with `begin_fetch`.
    ///
    /// `tags` replaces whatever the key provided before. An invalidation that
    /// landed while the request was in flight leaves the entry stale.
    pub fn complete(&mut self, key: &K, result: Result<T, String>, tags: Vec<CacheTag>) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.state.is_fetching = false;
        match result {
            Ok(data) => {
                entry.state.data = Some(data);
                entry.state.error = None;
            }
            Err(message) => entry.state.error = Some(message),
        }
        let old_tags = std::mem::replace(&mut entry.tags, tags.clone());

        for tag in old_tags {
            if let Some(keys) = self.tag_index.get_mut(&tag) {
                keys.remove(key);
                if keys.is_empty() {
                    self.tag_index.remove(&tag);
                }
            }
        }
        for tag in tags {
            self.tag_index.entry(tag).or_default().insert(key.clone());
        }
    }

    /// Mark every query that provided one of `tags` as stale and return the
    /// ones somebody is observing, i.e. those to refetch now. Unobserved
    /// entries are dropped unless a request for them is still in flight.
    pub fn invalidate(&mut self, tags: &[CacheTag]) -> Vec<K> {
        let affected: BTreeSet<K> = tags
            .iter()
            .filter_map(|tag| self.tag_index.get(tag))
            .flatten()
            .cloned()
            .collect();

        let mut refetch = Vec::new();
        let mut dropped = Vec::new();
        for key in affected {
            let Some(entry) = self.entries.get_mut(&key) else {
                continue;
            };
            entry.state.is_stale = true;
            if !entry.subscribers.is_empty() {
                refetch.push(key);
            } else if !entry.state.is_fetching {
                dropped.push(key);
            }
        }
        for key in &dropped {
            self.remove(key);
        }
        refetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(kind: &'static str, id: &str) -> CacheTag {
        CacheTag::new(kind, id)
    }

    fn loaded(store: &mut QueryStore<&'static str, u32>, key: &'static str, value: u32, tags: Vec<CacheTag>) {
        assert!(store.begin_fetch(&key));
        store.complete(&key, Ok(value), tags);
    }

    #[test]
    fn test_fresh_subscription_needs_fetch() {
        let mut store = QueryStore::<&str, u32>::new();
        assert!(!store.needs_fetch(&"list"));
        store.subscribe("list");
        assert!(store.needs_fetch(&"list"));
        assert_eq!(store.state(&"list").unwrap().status(), QueryStatus::Idle);

        assert!(store.begin_fetch(&"list"));
        assert!(!store.needs_fetch(&"list"));
        assert!(!store.begin_fetch(&"list"));
        assert_eq!(store.state(&"list").unwrap().status(), QueryStatus::Loading);

        store.complete(&"list", Ok(3), vec![tag("Items", "LIST")]);
        let state = store.state(&"list").unwrap();
        assert_eq!(state.status(), QueryStatus::Success);
        assert_eq!(state.data, Some(3));
        assert!(!store.needs_fetch(&"list"));
    }

    #[test]
    fn test_invalidate_returns_only_observed_keys() {
        let mut store = QueryStore::<&str, u32>::new();
        store.subscribe("list");
        loaded(&mut store, "list", 1, vec![tag("Items", "LIST"), tag("Item", "1")]);
        loaded(&mut store, "item-1", 1, vec![tag("Item", "1")]);

        let refetch = store.invalidate(&[tag("Item", "1")]);
        assert_eq!(refetch, vec!["list"]);
        assert!(store.state(&"list").unwrap().is_stale);
        assert!(store.state(&"item-1").is_none());

        // Dropped entry loads again for its next subscriber
        store.subscribe("item-1");
        assert!(store.needs_fetch(&"item-1"));
    }

    #[test]
    fn test_invalidate_unknown_tag_is_noop() {
        let mut store = QueryStore::<&str, u32>::new();
        store.subscribe("list");
        loaded(&mut store, "list", 1, vec![tag("Items", "LIST")]);
        assert!(store.invalidate(&[tag("Other", "LIST")]).is_empty());
        assert!(!store.state(&"list").unwrap().is_stale);
    }

    #[test]
    fn test_refetch_keeps_previous_data() {
        let mut store = QueryStore::<&str, u32>::new();
        store.subscribe("list");
        loaded(&mut store, "list", 1, vec![tag("Items", "LIST")]);
        store.invalidate(&[tag("Items", "LIST")]);
        assert!(store.needs_fetch(&"list"));
        store.begin_fetch(&"list");

        let state = store.state(&"list").unwrap();
        assert_eq!(state.data, Some(1));
        assert!(state.is_fetching);
        assert_eq!(state.status(), QueryStatus::Success);
    }

    #[test]
    fn test_invalidation_during_flight_keeps_entry_stale() {
        let mut store = QueryStore::<&str, u32>::new();
        store.subscribe("list");
        store.begin_fetch(&"list");
        store.complete(&"list", Ok(1), vec![tag("Items", "LIST")]);
        store.invalidate(&[tag("Items", "LIST")]);
        store.begin_fetch(&"list");

        // Mutation lands while the refetch is in flight
        store.invalidate(&[tag("Items", "LIST")]);
        store.complete(&"list", Ok(2), vec![tag("Items", "LIST")]);
        assert!(store.needs_fetch(&"list"));
    }

    #[test]
    fn test_error_is_terminal_until_new_subscriber() {
        let mut store = QueryStore::<&str, u32>::new();
        let first = store.subscribe("item-9");
        store.begin_fetch(&"item-9");
        store.complete(&"item-9", Err("HTTP 500".into()), vec![tag("Item", "9")]);

        let state = store.state(&"item-9").unwrap();
        assert_eq!(state.status(), QueryStatus::Error);
        assert!(!store.needs_fetch(&"item-9"));

        store.unsubscribe(&"item-9", first);
        assert!(store.state(&"item-9").is_none());
        store.subscribe("item-9");
        assert!(store.needs_fetch(&"item-9"));
    }

    #[test]
    fn test_visited_items_do_not_accumulate() {
        let mut store = QueryStore::<&str, u32>::new();
        let list = store.subscribe("list");
        loaded(&mut store, "list", 2, vec![tag("Items", "LIST"), tag("Item", "1"), tag("Item", "2")]);
        store.unsubscribe(&"list", list);

        for key in ["item-1", "item-2"] {
            let id = store.subscribe(key);
            loaded(&mut store, key, 1, vec![tag("Item", &key[5..])]);
            store.unsubscribe(&key, id);
        }
        let keys = ["list", "item-1", "item-2"];
        assert!(keys.iter().all(|k| store.state(k).is_some()));

        // Updates to both records drop every unobserved entry and its index rows
        store.invalidate(&[tag("Item", "1"), tag("Items", "LIST")]);
        store.invalidate(&[tag("Item", "2")]);
        assert!(keys.iter().all(|k| store.state(k).is_none()));
        assert!(store.invalidate(&[tag("Item", "1"), tag("Item", "2")]).is_empty());
    }

    #[test]
    fn test_in_flight_unobserved_entry_is_kept() {
        let mut store = QueryStore::<&str, u32>::new();
        let id = store.subscribe("item-3");
        store.begin_fetch(&"item-3");
        store.unsubscribe(&"item-3", id);
        store.invalidate(&[tag("Item", "3")]);
        store.complete(&"item-3", Ok(3), vec![tag("Item", "3")]);
        assert_eq!(store.data(&"item-3"), Some(&3));
    }

    #[test]
    fn test_retag_drops_old_tags() {
        let mut store = QueryStore::<&str, u32>::new();
        store.subscribe("list");
        loaded(&mut store, "list", 2, vec![tag("Item", "1"), tag("Item", "2")]);
        store.invalidate(&[tag("Item", "1")]);
        store.begin_fetch(&"list");
        store.complete(&"list", Ok(1), vec![tag("Item", "2")]);

        assert_eq!(store.tags(&"list"), &[tag("Item", "2")]);
        assert!(store.invalidate(&[tag("Item", "1")]).is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_refetch() {
        let mut store = QueryStore::<&str, u32>::new();
        let id = store.subscribe("list");
        loaded(&mut store, "list", 1, vec![tag("Items", "LIST")]);
        store.unsubscribe(&"list", id);
        assert!(!store.is_observed(&"list"));
        assert!(store.invalidate(&[tag("Items", "LIST")]).is_empty());
    }

    #[test]
    fn test_and_then_data_keeps_flags() {
        let state = QueryState {
            data: Some(vec![1, 2]),
            error: None,
            is_fetching: true,
            is_stale: false,
        };
        let mapped = state.and_then_data(|v| v.first().copied());
        assert_eq!(mapped.data, Some(1));
        assert!(mapped.is_fetching);
    }
}
