use crate::error::{Error, Result};

/// Bucket count used when none is given.
pub const DEFAULT_TABLE_SIZE: usize = 128;

/// Sizing for an [`LRUCache`](crate::LRUCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheConfig {
   /// Maximum number of live entries
   pub capacity: usize,
   /// Number of hash buckets, fixed for the cache's lifetime
   #[cfg_attr(feature = "serde", serde(default = "default_table_size"))]
   pub table_size: usize,
}

#[cfg(feature = "serde")]
fn default_table_size() -> usize {
   DEFAULT_TABLE_SIZE
}

impl CacheConfig {
   pub fn new(capacity: usize) -> Self {
      Self {
         capacity,
         table_size: DEFAULT_TABLE_SIZE,
      }
   }

   pub fn with_table_size(mut self, table_size: usize) -> Self {
      self.table_size = table_size;
      self
   }

   pub fn validate(&self) -> Result<()> {
      check_positive("capacity", self.capacity)?;
      check_positive("table size", self.table_size)
   }
}

pub(crate) fn check_positive(what: &'static str, requested: usize) -> Result<()> {
   if requested == 0 {
      return Err(Error::Construction { what, requested });
   }
   Ok(())
}
