pub mod json_backend;

use std::path::Path;

use crate::domain::Transaction;

pub type Result<T> = crate::errors::Result<T>;

/// Abstraction over persistence backends holding the single transaction blob.
pub trait StorageBackend: Send + Sync {
    /// Rewrites the whole blob from the given collection.
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
    /// Reads the blob. An absent blob is an empty collection, not an error.
    fn load(&self) -> Result<Vec<Transaction>>;
    /// Removes the blob entirely so a reload observes a fresh state.
    fn clear(&self) -> Result<()>;
    /// Where the blob lives, for logs and the CLI banner.
    fn location(&self) -> &Path;
}

pub use json_backend::JsonStorage;
