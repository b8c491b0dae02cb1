//! The guess book
//!
//! A single owned state object: the ordered record list, the form draft and
//! the store the list is mirrored to. The list is read from the store once in
//! [`GuessBook::load`] and written back, whole, after every successful
//! submission.
//!
//! ```text
//! load:    store.get(key) → decode → records      (absent/invalid → [])
//! submit:  draft → parse → record → encode(records + record) → store.set(key)
//!          → commit in memory → clear draft
//! ```

use chrono::{DateTime, Local, TimeZone};
use std::fmt;

use crate::guess::draft::{Draft, DraftField, FormBounds};
use crate::guess::error::{GuessError, GuessResult};
use crate::guess::stats::{compute_statistics, SummaryStats};
use crate::guess::types::{GuessRecord, RecordId};
use crate::store::KeyValueStore;

/// Store key the page has always used
pub const DEFAULT_STORAGE_KEY: &str = "palpitesBebe";

/// `submittedAt` layout (pt-BR `toLocaleString`)
pub const SUBMITTED_AT_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A record was appended and persisted
    Recorded(GuessRecord),
    /// Some fields were empty; nothing changed
    Incomplete { missing: Vec<DraftField> },
}

impl Submission {
    pub fn record(&self) -> Option<&GuessRecord> {
        match self {
            Submission::Recorded(record) => Some(record),
            Submission::Incomplete { .. } => None,
        }
    }
}

/// Decode a persisted record list
pub fn decode_records(raw: &str) -> GuessResult<Vec<GuessRecord>> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode the full record list for storage
pub fn encode_records(records: &[GuessRecord]) -> GuessResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Guess list, draft and backing store
pub struct GuessBook<S: KeyValueStore> {
    store: S,
    key: String,
    records: Vec<GuessRecord>,
    draft: Draft,
    bounds: FormBounds,
    last_id: Option<RecordId>,
}

impl<S: KeyValueStore> GuessBook<S> {
    /// Seed the book from `store[key]`.
    ///
    /// Absent, unreadable or malformed content yields an empty book; the
    /// failure is logged and never returned.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let records = match store.get(&key) {
            Ok(Some(raw)) => match decode_records(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "stored guesses are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "could not read stored guesses, starting empty");
                Vec::new()
            }
        };

        let last_id = records.iter().map(|r| r.id).max();
        tracing::debug!(key = %key, count = records.len(), "loaded guess book");

        Self {
            store,
            key,
            records,
            draft: Draft::default(),
            bounds: FormBounds::default(),
            last_id,
        }
    }

    /// Builder method: soft bounds used for out-of-range warnings
    pub fn with_bounds(mut self, bounds: FormBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn bounds(&self) -> &FormBounds {
        &self.bounds
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Statistics over the current list
    pub fn statistics(&self) -> SummaryStats {
        compute_statistics(&self.records)
    }

    /// Set one draft field. No validation, no storage write.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Submit the draft using the local clock
    pub fn submit_guess(&mut self) -> GuessResult<Submission> {
        self.submit_guess_at(Local::now())
    }

    /// Submit the draft as of `now`.
    ///
    /// An incomplete draft is a no-op. A complete draft is coerced, appended,
    /// persisted and then cleared. If coercion or the store write fails,
    /// records, draft and storage are all left as they were.
    pub fn submit_guess_at<Tz>(&mut self, now: DateTime<Tz>) -> GuessResult<Submission>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "draft incomplete, submission ignored");
            return Ok(Submission::Incomplete { missing });
        }

        let parsed = self.draft.parse()?;

        if !self.bounds.weight_in_bounds(parsed.weight_kg) {
            tracing::warn!(weight_kg = parsed.weight_kg, "weight outside form bounds, accepting as-is");
        }
        if !self.bounds.length_in_bounds(parsed.length_cm) {
            tracing::warn!(length_cm = parsed.length_cm, "length outside form bounds, accepting as-is");
        }

        let id = match RecordId::next(self.last_id, now.timestamp_millis()) {
            Some(id) => id,
            None => {
                let last = self.last_id.unwrap_or(RecordId(u64::MAX));
                tracing::error!(%last, "record ids exhausted");
                return Err(GuessError::IdsExhausted(last));
            }
        };
        let submitted_at = now.format(SUBMITTED_AT_FORMAT).to_string();
        let record = parsed.into_record(id, submitted_at);

        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend_from_slice(&self.records);
        next.push(record.clone());
        self.persist(&next)?;

        self.records = next;
        self.last_id = Some(id);
        self.draft.clear();

        tracing::info!(
            id = %record.id,
            name = %record.guesser_name,
            sex = %record.sex,
            total = self.records.len(),
            "recorded guess"
        );
        Ok(Submission::Recorded(record))
    }

    fn persist(&mut self, records: &[GuessRecord]) -> GuessResult<()> {
        let encoded = encode_records(records)?;
        self.store.set(&self.key, &encoded)?;
        tracing::debug!(key = %self.key, count = records.len(), "saved guess book");
        Ok(())
    }
}

impl<S: KeyValueStore> fmt::Debug for GuessBook<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuessBook")
            .field("key", &self.key)
            .field("records", &self.records.len())
            .field("draft", &self.draft)
            .finish()
    }
}
