use chained_lru::{Cache, CacheConfig, Error, LRUCache};
use proptest::prelude::*;

fn make_small_cache() -> LRUCache<i32, i32> {
   LRUCache::with_capacity(2).unwrap()
}

#[test]
fn get_on_empty_cache_is_absent() {
   let mut cache = make_small_cache();
   assert_eq!(cache.get(&10), None);
   assert!(cache.is_empty());
}

#[test]
fn get_other_key_is_absent() {
   let mut cache = make_small_cache();
   cache.put(20, 42);
   assert_eq!(cache.get(&10), None);
   assert_eq!(cache.get(&20), Some(&42));
}

#[test]
fn overload_evicts_oldest() {
   let mut cache = make_small_cache();
   cache.put(1, 42);
   cache.put(2, 0);
   cache.put(3, 5);

   assert_eq!(cache.get(&1), None, "key 1 should have been evicted");
   assert_eq!(cache.get(&2), Some(&0));
   assert_eq!(cache.get(&3), Some(&5));
}

#[test]
fn read_refreshes_recency() {
   let mut cache = make_small_cache();
   cache.put(1, 42);
   cache.put(2, 0);
   cache.get(&1);
   cache.put(3, 10);

   assert_eq!(cache.get(&2), None, "key 2 should have been evicted");
   assert_eq!(cache.get(&1), Some(&42));
   assert_eq!(cache.get(&3), Some(&10));
}

#[test]
fn put_existing_updates_without_growing() {
   let mut cache = make_small_cache();
   cache.put(1, 1);
   cache.put(2, 2);
   assert_eq!(cache.put(1, 11), Some(1));
   assert_eq!(cache.len(), 2);
   // 1 was refreshed, so 2 is the eviction victim
   cache.put(3, 3);
   assert_eq!(cache.get(&2), None);
   assert_eq!(cache.get(&1), Some(&11));
}

#[test]
fn distinct_puts_within_capacity_are_all_retained() {
   let mut cache = LRUCache::with_capacity(64).unwrap();
   for i in 0..64 {
      cache.put(i, i * 2);
   }
   for i in 0..64 {
      assert_eq!(cache.get(&i), Some(&(i * 2)));
   }
}

#[test]
fn keys_are_ordered_most_recent_first() {
   let mut cache = LRUCache::with_capacity(3).unwrap();
   cache.put("a", 1);
   cache.put("b", 2);
   cache.put("c", 3);
   cache.get(&"a");
   assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["a", "c", "b"]);
}

#[test]
fn zero_capacity_is_rejected() {
   let err = LRUCache::<i32, i32>::with_capacity(0).err();
   assert!(matches!(err, Some(Error::Construction { requested: 0, .. })));
   let err = LRUCache::<i32, i32>::with_config(CacheConfig::new(2).with_table_size(0)).err();
   assert!(matches!(err, Some(Error::Construction { what: "table size", .. })));
}

#[derive(Debug, Clone)]
enum Op {
   Get(u8),
   Put(u8, u32),
   Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
   prop_oneof![
      (0u8..10).prop_map(Op::Get),
      (0u8..10, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
      (0u8..10).prop_map(Op::Remove),
   ]
}

/// Reference model: entries ordered from most to least recent.
fn model_touch(model: &mut Vec<(u8, u32)>, k: u8) -> Option<u32> {
   let index = model.iter().position(|(key, _)| *key == k)?;
   let entry = model.remove(index);
   model.insert(0, entry);
   Some(entry.1)
}

proptest! {
   #[test]
   fn behaves_like_reference_model(
      cap in 1usize..6,
      ops in prop::collection::vec(op(), 0..128),
   ) {
      let mut cache = LRUCache::with_config(CacheConfig::new(cap).with_table_size(4)).unwrap();
      let mut model: Vec<(u8, u32)> = Vec::new();
      for op in ops {
         match op {
            Op::Get(k) => {
               let expected = model_touch(&mut model, k);
               prop_assert_eq!(cache.get(&k).copied(), expected);
            }
            Op::Put(k, v) => {
               let previous = match model_touch(&mut model, k) {
                  Some(old) => {
                     model[0].1 = v;
                     Some(old)
                  }
                  None => {
                     if model.len() == cap {
                        model.pop();
                     }
                     model.insert(0, (k, v));
                     None
                  }
               };
               prop_assert_eq!(cache.put(k, v), previous);
            }
            Op::Remove(k) => {
               let index = model.iter().position(|(key, _)| *key == k);
               let expected = index.map(|index| model.remove(index).1);
               prop_assert_eq!(cache.remove(&k), expected);
            }
         }
         let keys: Vec<u8> = model.iter().map(|(k, _)| *k).collect();
         prop_assert_eq!(cache.keys().copied().collect::<Vec<_>>(), keys);
         prop_assert_eq!(cache.len(), model.len());
      }
   }
}
