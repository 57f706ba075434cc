use thiserror::Error;

/// Result type for cache and table operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
   /// A capacity or table size that cannot hold a single entry
   #[error("{what} must be greater than 0, got {requested}")]
   Construction { what: &'static str, requested: usize },
   /// An absent key handed to the hash index
   #[error("hash index key cannot be absent")]
   InvalidKey,
}
