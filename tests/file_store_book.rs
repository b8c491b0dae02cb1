//! End-to-end: a guess book backed by files on disk

use chrono::{FixedOffset, TimeZone};
use guessbook::guess::{format_date, DraftField, GuessBook, Submission, DEFAULT_STORAGE_KEY};
use guessbook::store::{FileStore, KeyValueStore};
use tempfile::tempdir;

fn submit(book: &mut GuessBook<FileStore>, name: &str, sex: &str, weight: &str, length: &str, minute: u32) {
    book.update_draft_field(DraftField::GuesserName, name);
    book.update_draft_field(DraftField::Sex, sex);
    book.update_draft_field(DraftField::WeightKg, weight);
    book.update_draft_field(DraftField::LengthCm, length);
    book.update_draft_field(DraftField::BirthDate, "2024-03-07");

    let now = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 2, 1, 12, minute, 0)
        .unwrap();
    let outcome = book.submit_guess_at(now).unwrap();
    assert!(matches!(outcome, Submission::Recorded(_)));
}

#[test]
fn test_guesses_survive_restart() {
    let dir = tempdir().unwrap();

    let mut book = GuessBook::load(FileStore::new(dir.path()), DEFAULT_STORAGE_KEY);
    submit(&mut book, "Ana", "feminino", "3.0", "48", 0);
    submit(&mut book, "Bruno", "masculino", "3.4", "52", 1);
    let before = book.records().to_vec();
    drop(book);

    let book = GuessBook::load(FileStore::new(dir.path()), DEFAULT_STORAGE_KEY);
    assert_eq!(book.records(), before.as_slice());

    let stats = book.statistics();
    assert_eq!(stats.count_by_sex.male, 1);
    assert_eq!(stats.count_by_sex.female, 1);
    assert_eq!(stats.average_weight_kg, 3.2);
    assert_eq!(stats.average_length_cm, 50.0);

    let record = &book.records()[0];
    assert_eq!(
        format_date(&record.birth_date.to_string()).unwrap(),
        record.birth_date_display()
    );
}

#[test]
fn test_corrupted_file_starts_empty() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.set(DEFAULT_STORAGE_KEY, "[{\"id\": 1, \"nome\": ").unwrap();

    let mut book = GuessBook::load(store, DEFAULT_STORAGE_KEY);
    assert!(book.is_empty());

    // The next submission overwrites the corrupted content
    submit(&mut book, "Carla", "feminino", "2.9", "47", 5);
    let reloaded = GuessBook::load(FileStore::new(dir.path()), DEFAULT_STORAGE_KEY);
    assert_eq!(reloaded.len(), 1);
}
