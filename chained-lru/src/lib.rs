//! A bounded least-recently-used cache built from a chained hash table and a
//! doubly linked recency list.
//!
//! None of the types synchronize internally; share them across threads only
//! behind an external lock.

use std::hash::Hash;

mod config;
mod error;
pub mod hash_index;
pub mod list;
pub mod lru;

pub use config::{CacheConfig, DEFAULT_TABLE_SIZE};
pub use error::{Error, Result};
pub use hash_index::HashIndex;
pub use list::List;
pub use lru::LRUCache;

pub trait Cache<K: Hash + Eq, V> {
   /// Returns the value for `k` and marks it most recently used.
   fn get(&mut self, k: &K) -> Option<&V>;
   /// Stores `v` under `k`, returning the value it replaced. Storing a new
   /// key into a full cache evicts the least recently used entry.
   fn put(&mut self, k: K, v: V) -> Option<V>;
   fn remove(&mut self, k: &K) -> Option<V>;
   fn is_empty(&self) -> bool;
}
