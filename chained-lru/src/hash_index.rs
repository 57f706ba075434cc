//! Fixed-size hash table with separate chaining.
//!
//! Each bucket is a [`List`] of entries that share a slot. The table never
//! resizes, so chains grow with the number of entries and lookups scan them
//! linearly.

use crate::config::{check_positive, DEFAULT_TABLE_SIZE};
use crate::error::{Error, Result};
use crate::list::List;
use log::trace;
use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::mem;

/// Deterministic hasher used unless the caller supplies one.
pub type DefaultBuildHasher = BuildHasherDefault<DefaultHasher>;

struct Entry<K, V> {
   key: K,
   value: V,
}

type Bucket<K, V> = List<Entry<K, V>>;

pub struct HashIndex<K, V, S = DefaultBuildHasher> {
   // `None` for a slot that holds no entries, whether or not it was ever used
   buckets: Vec<Option<Bucket<K, V>>>,
   hasher: S,
   len: usize,
}

impl<K: Hash + Eq, V> HashIndex<K, V> {
   /// Creates a table with [`DEFAULT_TABLE_SIZE`] buckets.
   pub fn new() -> Self {
      Self::from_parts(DEFAULT_TABLE_SIZE, DefaultBuildHasher::default())
   }

   pub fn with_table_size(table_size: usize) -> Result<Self> {
      Self::with_table_size_and_hasher(table_size, DefaultBuildHasher::default())
   }
}

impl<K: Hash + Eq, V> Default for HashIndex<K, V> {
   fn default() -> Self {
      Self::new()
   }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashIndex<K, V, S> {
   pub fn with_hasher(hasher: S) -> Self {
      Self::from_parts(DEFAULT_TABLE_SIZE, hasher)
   }

   pub fn with_table_size_and_hasher(table_size: usize, hasher: S) -> Result<Self> {
      check_positive("table size", table_size)?;
      Ok(Self::from_parts(table_size, hasher))
   }

   fn from_parts(table_size: usize, hasher: S) -> Self {
      let mut buckets = Vec::with_capacity(table_size);
      buckets.resize_with(table_size, || None);
      Self {
         buckets,
         hasher,
         len: 0,
      }
   }

   pub fn table_size(&self) -> usize {
      self.buckets.len()
   }

   pub fn len(&self) -> usize {
      self.len
   }

   pub fn is_empty(&self) -> bool {
      self.len == 0
   }

   /// Stores `value` under `key`, returning the value it replaced.
   ///
   /// A key already present in its bucket is updated in place, so a bucket
   /// never holds two entries with equal keys.
   pub fn put(&mut self, key: K, value: V) -> Option<V> {
      let slot = self.hash(&key);
      let bucket = self.buckets[slot].get_or_insert_with(List::new);
      if let Some(entry) = bucket.find_mut(|e| e.key == key) {
         trace!("hash index: replacing entry in bucket {slot}");
         return Some(mem::replace(&mut entry.value, value));
      }
      bucket.push_back(Entry { key, value });
      self.len += 1;
      trace!("hash index: bucket {slot} now holds {} entries", bucket.len());
      None
   }

   /// Like [`put`](Self::put), for keys that may be missing.
   ///
   /// Fails with [`Error::InvalidKey`] when `key` is `None`.
   pub fn try_put(&mut self, key: Option<K>, value: V) -> Result<Option<V>> {
      let key = key.ok_or(Error::InvalidKey)?;
      Ok(self.put(key, value))
   }

   pub fn get(&self, key: &K) -> Option<&V> {
      let bucket = self.buckets[self.hash(key)].as_ref()?;
      bucket.find(|e| e.key == *key).map(|e| &e.value)
   }

   pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
      let slot = self.hash(key);
      let bucket = self.buckets[slot].as_mut()?;
      bucket.find_mut(|e| e.key == *key).map(|e| &mut e.value)
   }

   pub fn contains_key(&self, key: &K) -> bool {
      self.get(key).is_some()
   }

   /// Removes the entry for `key` and returns its value; a missing key is a
   /// no-op.
   pub fn remove(&mut self, key: &K) -> Option<V> {
      let slot = self.hash(key);
      let bucket = self.buckets[slot].as_mut()?;
      let index = bucket.find_first_index(|e| e.key == *key)?;
      let entry = bucket.remove_at(index)?;
      if bucket.is_empty() {
         self.buckets[slot] = None;
      }
      self.len -= 1;
      Some(entry.value)
   }

   fn hash(&self, key: &K) -> usize {
      // The hash code is reduced in the unsigned 64-bit domain and only then
      // narrowed, so the slot is always in `0..table_size`.
      let code: u64 = self.hasher.hash_one(key);
      (code % self.buckets.len() as u64) as usize
   }
}
