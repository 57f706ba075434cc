use crate::config::CacheConfig;
use crate::error::Result;
use crate::hash_index::{DefaultBuildHasher, HashIndex};
use crate::list::{self, List};
use crate::Cache;
use log::{debug, trace};
use std::hash::{BuildHasher, Hash};

/// Capacity-bounded cache that evicts the least recently used entry.
///
/// Values live in a [`HashIndex`]; a [`List`] of keys records recency with
/// the most recently touched key at the front. Both structures always hold
/// the same key set.
///
/// A hit finds its key in the recency list by linear scan, so refreshing a
/// key costs time proportional to its distance from the front.
pub struct LRUCache<K, V, S = DefaultBuildHasher> {
   values: HashIndex<K, V, S>,
   keys: List<K>,
   cap: usize,
}

impl<K: Hash + Eq + Clone, V> LRUCache<K, V> {
   pub fn with_capacity(cap: usize) -> Result<Self> {
      Self::with_config(CacheConfig::new(cap))
   }

   pub fn with_config(config: CacheConfig) -> Result<Self> {
      Self::with_config_and_hasher(config, DefaultBuildHasher::default())
   }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LRUCache<K, V, S> {
   pub fn with_config_and_hasher(config: CacheConfig, hasher: S) -> Result<Self> {
      config.validate()?;
      let values = HashIndex::with_table_size_and_hasher(config.table_size, hasher)?;
      debug!(
         "lru cache created: capacity={}, table_size={}",
         config.capacity, config.table_size
      );
      Ok(Self {
         values,
         keys: List::new(),
         cap: config.capacity,
      })
   }

   pub fn capacity(&self) -> usize {
      self.cap
   }

   pub fn len(&self) -> usize {
      self.keys.len()
   }

   /// Checks for `k` without touching its recency.
   pub fn contains(&self, k: &K) -> bool {
      self.values.contains_key(k)
   }

   /// Reads the value for `k` without touching its recency.
   pub fn peek(&self, k: &K) -> Option<&V> {
      self.values.get(k)
   }

   /// Keys from most to least recently used.
   pub fn keys(&self) -> list::Iter<'_, K> {
      self.keys.iter()
   }

   // move the key at `index` to the front
   fn update(&mut self, index: usize) {
      if index == 0 {
         return;
      }
      if let Some(key) = self.keys.remove_at(index) {
         trace!("lru cache: refreshing key at position {index}");
         self.keys.push_front(key);
      }
   }

   fn disuse(&mut self) {
      // the key has to leave the list before its entry leaves the table
      if let Some(key) = self.keys.pop_back() {
         self.values.remove(&key);
         debug!(
            "lru cache: evicted least recently used entry, capacity {}",
            self.cap
         );
      }
   }

   #[cfg(test)]
   fn assert_consistent(&self) {
      self.keys.assert_links();
      assert_eq!(self.keys.len(), self.values.len());
      assert!(self.keys.len() <= self.cap);
      for key in self.keys.iter() {
         assert!(self.values.contains_key(key));
      }
   }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> Cache<K, V> for LRUCache<K, V, S> {
   fn get(&mut self, k: &K) -> Option<&V> {
      // a miss leaves the recency order alone
      if !self.values.contains_key(k) {
         return None;
      }
      if let Some(index) = self.keys.position(k) {
         self.update(index);
      }
      self.values.get(k)
   }

   fn put(&mut self, k: K, v: V) -> Option<V> {
      // cache exist
      if let Some(index) = self.keys.position(&k) {
         self.update(index);
         return self.values.put(k, v);
      }
      // cache not exist, check cap
      if self.keys.len() >= self.cap {
         self.disuse();
      }
      self.keys.push_front(k.clone());
      self.values.put(k, v)
   }

   fn remove(&mut self, k: &K) -> Option<V> {
      let value = self.values.remove(k)?;
      if let Some(index) = self.keys.position(k) {
         self.keys.remove_at(index);
      }
      Some(value)
   }

   fn is_empty(&self) -> bool {
      self.keys.is_empty() && self.values.is_empty()
   }
}
