//! Client-side query cache
//!
//! - tags.rs: cache tags attached to query results
//! - store.rs: plain state (entries, tag index, subscribers); no reactivity
//! - client.rs: Leptos-facing client and the `use_query` hook

mod client;
mod store;
mod tags;

pub use client::{use_query, QueryClient};
pub use store::{QueryState, QueryStatus, QueryStore, SubscriberId};
pub use tags::CacheTag;
