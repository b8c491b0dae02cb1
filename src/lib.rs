//! # GuessBook
//!
//! Collects guesses about an unborn baby (who guessed, sex, weight, length,
//! birth date), keeps them in a local key-value store and derives summary
//! statistics for the charts.
//!
//! ## Modules
//!
//! - [`guess`]: records, form draft, the `GuessBook` state object, statistics
//! - [`store`]: the key-value store seam and its memory/file backends
//! - `config`: TOML configuration with environment overrides (feature `cli`)
//! - `logging`: tracing subscriber setup (feature `cli`)
//!
//! The browser page lives in the `guessbook-ui` crate and plugs
//! `window.localStorage` into the same [`store::KeyValueStore`] seam.

#[cfg(feature = "cli")]
pub mod config;
pub mod guess;
#[cfg(feature = "cli")]
pub mod logging;
pub mod store;

// Re-export top-level types for convenience
pub use guess::{
    compute_statistics, format_date, DateFormatError, Draft, DraftField, FormBounds,
    GuessBook, GuessError, GuessRecord, GuessResult, RecordId, Sex, SexCounts, Submission,
    SummaryStats, DEFAULT_STORAGE_KEY,
};

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig, StorageConfig};

#[cfg(feature = "cli")]
pub use logging::init_logging;
