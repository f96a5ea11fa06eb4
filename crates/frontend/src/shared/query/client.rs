use leptos::prelude::*;
use leptos::task::spawn_local;
use std::fmt::Debug;
use std::future::Future;

use super::store::{QueryState, QueryStore, SubscriberId};
use super::tags::CacheTag;
use crate::shared::api_utils::ApiError;

/// Reactive handle over a [`QueryStore`], shared through context.
///
/// Views read through [`use_query`]; only the data-access layer writes, via
/// `fetch` and `invalidate`.
pub struct QueryClient<K: 'static, T: 'static> {
    store: RwSignal<QueryStore<K, T>>,
}

impl<K: 'static, T: 'static> Clone for QueryClient<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static, T: 'static> Copy for QueryClient<K, T> {}

impl<K, T> QueryClient<K, T>
where
    K: Ord + Clone + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(QueryStore::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_store(store: QueryStore<K, T>) -> Self {
        Self {
            store: RwSignal::new(store),
        }
    }

    /// Tracked read of one query
    pub fn state(&self, key: &K) -> QueryState<T> {
        self.store
            .with(|s| s.state(key).cloned())
            .unwrap_or_default()
    }

    pub fn subscribe(&self, key: K) -> SubscriberId {
        self.store
            .try_update(|s| s.subscribe(key))
            .unwrap_or_default()
    }

    pub fn unsubscribe(&self, key: &K, id: SubscriberId) {
        self.store.try_update(|s| s.unsubscribe(key, id));
    }

    /// Mark everything tagged with `tags` stale. Observing views refetch on
    /// their next reactive run.
    pub fn invalidate(&self, tags: &[CacheTag]) -> Vec<K> {
        let refetch = self
            .store
            .try_update(|s| s.invalidate(tags))
            .unwrap_or_default();
        log::debug!(
            "invalidated [{}], refetching {:?}",
            tags.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            refetch
        );
        refetch
    }

    /// Issue `fetcher` for `key` unless a request is already in flight
    pub fn fetch<F, Fut>(&self, key: K, fetcher: F, provides: fn(&K, Option<&T>) -> Vec<CacheTag>)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let started = self
            .store
            .try_update(|s| s.begin_fetch(&key))
            .unwrap_or(false);
        if !started {
            return;
        }

        let store = self.store;
        spawn_local(async move {
            let result = fetcher().await;
            if let Err(e) = &result {
                log::warn!("query {:?} failed: {}", key, e);
            }
            let tags = provides(&key, result.as_ref().ok());
            store.try_update(|s| s.complete(&key, result.map_err(|e| e.to_string()), tags));
        });
    }
}

impl<K, T> Default for QueryClient<K, T>
where
    K: Ord + Clone + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Subscribe the current component to `key` for its lifetime.
///
/// Fetches when the entry has never been loaded and again whenever a mutation
/// invalidates one of the tags it provided.
pub fn use_query<K, T, F, Fut>(
    client: QueryClient<K, T>,
    key: K,
    fetcher: F,
    provides: fn(&K, Option<&T>) -> Vec<CacheTag>,
) -> Signal<QueryState<T>>
where
    K: Ord + Clone + Debug + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let subscriber = client.subscribe(key.clone());
    {
        let key = key.clone();
        on_cleanup(move || client.unsubscribe(&key, subscriber));
    }

    {
        let key = key.clone();
        Effect::new(move |_| {
            if client.store.with(|s| s.needs_fetch(&key)) {
                client.fetch(key.clone(), fetcher.clone(), provides);
            }
        });
    }

    Signal::derive(move || client.state(&key))
}
