//! Core data types for the guess book
//!
//! - `GuessRecord`: one submitted guess
//! - `Sex`: the guessed sex, persisted in the source locale's terms
//! - `RecordId`: time-based unique identifier
//!
//! Field names on the wire follow the layout the page has always written to
//! local storage (`nome`, `sexo`, `peso`, `tamanho`, `dataNascimento`,
//! `timestamp`), so existing lists keep loading.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::guess::date::format_date;

/// Unique record identifier (Unix milliseconds at creation, made monotonic)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Next id after `last`, based on `now_ms` but strictly greater than `last`.
    ///
    /// Returns `None` once `last` is already `u64::MAX`.
    pub fn next(last: Option<RecordId>, now_ms: i64) -> Option<Self> {
        let candidate = now_ms.max(0) as u64;
        match last {
            Some(RecordId(prev)) if candidate <= prev => prev.checked_add(1).map(RecordId),
            _ => Some(RecordId(candidate)),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Guessed sex of the baby
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
    /// Anything else found in a persisted record (including a missing or
    /// non-string value); counted in no bucket
    #[default]
    Unrecognized,
}

impl Sex {
    /// Both selectable values, in display order
    pub fn all() -> &'static [Sex] {
        &[Sex::Male, Sex::Female]
    }

    /// Parse form input. Accepts the stored terms and their English names.
    pub fn from_input(value: &str) -> Option<Sex> {
        match value.trim().to_lowercase().as_str() {
            "masculino" | "male" => Some(Sex::Male),
            "feminino" | "female" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Value used by the form control and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "masculino",
            Sex::Female => "feminino",
            Sex::Unrecognized => "desconhecido",
        }
    }

    /// Capitalized display label
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
            Sex::Unrecognized => "Desconhecido",
        }
    }
}

impl Serialize for Sex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw.as_ref().and_then(Value::as_str) {
            Some("masculino") => Sex::Male,
            Some("feminino") => Sex::Female,
            _ => Sex::Unrecognized,
        })
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One submitted guess
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuessRecord {
    pub id: RecordId,
    #[serde(rename = "nome")]
    pub guesser_name: String,
    #[serde(rename = "sexo", default)]
    pub sex: Sex,
    #[serde(rename = "peso")]
    pub weight_kg: f64,
    #[serde(rename = "tamanho")]
    pub length_cm: u32,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    /// Local time of submission, already formatted for display
    #[serde(rename = "timestamp")]
    pub submitted_at: String,
}

impl GuessRecord {
    /// Birth date as `DD/MM/YYYY`. Years outside `0000..=9999` keep the
    /// ISO form since they have no four-digit rendering.
    pub fn birth_date_display(&self) -> String {
        let iso = self.birth_date.format("%Y-%m-%d").to_string();
        format_date(&iso).unwrap_or(iso)
    }

    /// Weight with unit suffix, e.g. `3.4 kg`
    pub fn weight_display(&self) -> String {
        format!("{} kg", self.weight_kg)
    }

    /// Length with unit suffix, e.g. `50 cm`
    pub fn length_display(&self) -> String {
        format!("{} cm", self.length_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GuessRecord {
        GuessRecord {
            id: RecordId(1709820309000),
            guesser_name: "Ana".to_string(),
            sex: Sex::Female,
            weight_kg: 3.4,
            length_cm: 50,
            birth_date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            submitted_at: "07/03/2024, 14:05:09".to_string(),
        }
    }

    #[test]
    fn test_record_id_monotonic() {
        assert_eq!(RecordId::next(None, 1000), Some(RecordId(1000)));
        assert_eq!(RecordId::next(Some(RecordId(999)), 1000), Some(RecordId(1000)));
        assert_eq!(RecordId::next(Some(RecordId(1000)), 1000), Some(RecordId(1001)));
        assert_eq!(RecordId::next(Some(RecordId(2000)), 1000), Some(RecordId(2001)));
    }

    #[test]
    fn test_record_id_exhausted() {
        assert_eq!(RecordId::next(Some(RecordId(u64::MAX)), 1000), None);
        assert_eq!(
            RecordId::next(Some(RecordId(u64::MAX - 1)), 1000),
            Some(RecordId(u64::MAX))
        );
    }

    #[test]
    fn test_sex_from_input() {
        assert_eq!(Sex::from_input("masculino"), Some(Sex::Male));
        assert_eq!(Sex::from_input(" Feminino "), Some(Sex::Female));
        assert_eq!(Sex::from_input("female"), Some(Sex::Female));
        assert_eq!(Sex::from_input("outro"), None);
        assert_eq!(Sex::from_input("m"), None);
        assert_eq!(Sex::from_input(""), None);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["id"], 1709820309000u64);
        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["sexo"], "feminino");
        assert_eq!(json["peso"], 3.4);
        assert_eq!(json["tamanho"], 50);
        assert_eq!(json["dataNascimento"], "2024-03-07");
        assert_eq!(json["timestamp"], "07/03/2024, 14:05:09");
    }

    #[test]
    fn test_unknown_sex_deserializes() {
        let json = r#"{"id":1,"nome":"Rui","sexo":"surpresa","peso":3.1,"tamanho":49,
            "dataNascimento":"2024-05-01","timestamp":"01/04/2024, 10:00:00"}"#;
        let record: GuessRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.sex, Sex::Unrecognized);
        assert_eq!(record.guesser_name, "Rui");
    }

    #[test]
    fn test_non_string_or_missing_sex_deserializes() {
        for sexo in [r#""sexo":null,"#, r#""sexo":7,"#, r#""sexo":{"v":1},"#, ""] {
            let json = format!(
                r#"{{"id":1,"nome":"Rui",{}"peso":3.1,"tamanho":49,
                "dataNascimento":"2024-05-01","timestamp":"01/04/2024, 10:00:00"}}"#,
                sexo
            );
            let record: GuessRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record.sex, Sex::Unrecognized, "sexo {:?}", sexo);
        }
    }

    #[test]
    fn test_display_helpers() {
        let record = sample();
        assert_eq!(record.birth_date_display(), "07/03/2024");
        assert_eq!(record.weight_display(), "3.4 kg");
        assert_eq!(record.length_display(), "50 cm");

        let whole = GuessRecord {
            weight_kg: 3.0,
            ..sample()
        };
        assert_eq!(whole.weight_display(), "3 kg");
    }

    #[test]
    fn test_birth_date_display_outside_four_digit_years() {
        let far = GuessRecord {
            birth_date: NaiveDate::from_ymd_opt(12024, 3, 7).unwrap(),
            ..sample()
        };
        assert_eq!(far.birth_date_display(), "+12024-03-07");
    }
}
