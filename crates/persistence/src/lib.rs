//! Persistence layer for the franchise site.
//!
//! This crate contains:
//! - The key-value store and its file and in-memory backends
//! - Storage keys and the first-run seed data
//! - Repository implementations over the store

pub mod keys;
pub mod metrics;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, Store, StoreError};
