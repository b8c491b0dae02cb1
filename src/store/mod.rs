//! Key-value store seam
//!
//! The guess book only needs a string-to-string store with overwrite
//! semantics. Backends:
//!
//! - **memory**: `HashMap`-backed, used by tests and benchmarks
//! - **file**: one JSON file per key inside a data directory (CLI)
//!
//! The browser front end provides its own `localStorage` backend.

pub mod error;
pub mod file;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// A synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
