//! GuessBook core
//!
//! - **types**: `GuessRecord`, `Sex`, `RecordId`
//! - **draft**: raw form state and its coercion into a record
//! - **book**: the owned state object mirrored to a key-value store
//! - **stats**: counts by sex and rounded averages
//! - **date**: `YYYY-MM-DD` → `DD/MM/YYYY`
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use guessbook::guess::{DraftField, GuessBook, Submission, DEFAULT_STORAGE_KEY};
//! use guessbook::store::MemoryStore;
//!
//! let mut book = GuessBook::load(MemoryStore::new(), DEFAULT_STORAGE_KEY);
//! book.update_draft_field(DraftField::GuesserName, "Ana");
//! book.update_draft_field(DraftField::Sex, "feminino");
//! book.update_draft_field(DraftField::WeightKg, "3.4");
//! book.update_draft_field(DraftField::LengthCm, "50");
//! book.update_draft_field(DraftField::BirthDate, "2024-03-07");
//!
//! let outcome = book.submit_guess().unwrap();
//! assert!(matches!(outcome, Submission::Recorded(_)));
//! assert_eq!(book.statistics().count_by_sex.female, 1);
//! ```

pub mod book;
pub mod date;
pub mod draft;
pub mod error;
pub mod stats;
pub mod types;

pub use book::{
    decode_records, encode_records, GuessBook, Submission, DEFAULT_STORAGE_KEY,
    SUBMITTED_AT_FORMAT,
};
pub use date::{format_date, DateFormatError};
pub use draft::{Draft, DraftField, FormBounds, ParsedGuess};
pub use error::{GuessError, GuessResult};
pub use stats::{compute_statistics, ChartSlice, SexCounts, SummaryStats};
pub use types::{GuessRecord, RecordId, Sex};
