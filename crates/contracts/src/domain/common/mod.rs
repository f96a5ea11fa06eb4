//! Common types and traits shared by all aggregates

pub mod aggregate_root;

pub use aggregate_root::AggregateRoot;
