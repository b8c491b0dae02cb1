//! Form draft
//!
//! The in-progress values bound to the input form. Everything is kept as raw
//! text exactly as the controls report it; coercion happens only on submit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::guess::error::{GuessError, GuessResult};
use crate::guess::types::{GuessRecord, RecordId, Sex};

/// One field of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    GuesserName,
    Sex,
    WeightKg,
    LengthCm,
    BirthDate,
}

impl DraftField {
    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::GuesserName,
            DraftField::Sex,
            DraftField::WeightKg,
            DraftField::LengthCm,
            DraftField::BirthDate,
        ]
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::GuesserName => write!(f, "name"),
            DraftField::Sex => write!(f, "sex"),
            DraftField::WeightKg => write!(f, "weight"),
            DraftField::LengthCm => write!(f, "length"),
            DraftField::BirthDate => write!(f, "birth date"),
        }
    }
}

/// Soft bounds enforced by the form controls, not by the data model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormBounds {
    pub weight_min_kg: f64,
    pub weight_max_kg: f64,
    pub weight_step_kg: f64,
    pub length_min_cm: u32,
    pub length_max_cm: u32,
}

impl Default for FormBounds {
    fn default() -> Self {
        Self {
            weight_min_kg: 1.0,
            weight_max_kg: 6.0,
            weight_step_kg: 0.1,
            length_min_cm: 30,
            length_max_cm: 70,
        }
    }
}

impl FormBounds {
    pub fn weight_in_bounds(&self, weight_kg: f64) -> bool {
        weight_kg >= self.weight_min_kg && weight_kg <= self.weight_max_kg
    }

    pub fn length_in_bounds(&self, length_cm: u32) -> bool {
        length_cm >= self.length_min_cm && length_cm <= self.length_max_cm
    }
}

/// Raw, unvalidated form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub guesser_name: String,
    pub sex: String,
    pub weight_kg: String,
    pub length_cm: String,
    pub birth_date: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::GuesserName => &self.guesser_name,
            DraftField::Sex => &self.sex,
            DraftField::WeightKg => &self.weight_kg,
            DraftField::LengthCm => &self.length_cm,
            DraftField::BirthDate => &self.birth_date,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::GuesserName => &mut self.guesser_name,
            DraftField::Sex => &mut self.sex,
            DraftField::WeightKg => &mut self.weight_kg,
            DraftField::LengthCm => &mut self.length_cm,
            DraftField::BirthDate => &mut self.birth_date,
        };
        *slot = value.into();
    }

    /// Fields that are empty or whitespace only
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::all()
            .iter()
            .copied()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }

    /// Coerce every field. Call only on a complete draft; an empty field is
    /// reported as invalid.
    pub fn parse(&self) -> GuessResult<ParsedGuess> {
        let guesser_name = self.guesser_name.trim().to_string();
        if guesser_name.is_empty() {
            return Err(GuessError::invalid(DraftField::GuesserName, "must not be empty"));
        }

        let sex = Sex::from_input(&self.sex).ok_or_else(|| {
            GuessError::invalid(DraftField::Sex, format!("unknown value {:?}", self.sex))
        })?;

        Ok(ParsedGuess {
            guesser_name,
            sex,
            weight_kg: parse_weight(&self.weight_kg)?,
            length_cm: parse_length(&self.length_cm)?,
            birth_date: parse_birth_date(&self.birth_date)?,
        })
    }
}

/// A draft whose fields have all been coerced
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGuess {
    pub guesser_name: String,
    pub sex: Sex,
    pub weight_kg: f64,
    pub length_cm: u32,
    pub birth_date: NaiveDate,
}

impl ParsedGuess {
    pub fn into_record(self, id: RecordId, submitted_at: String) -> GuessRecord {
        GuessRecord {
            id,
            guesser_name: self.guesser_name,
            sex: self.sex,
            weight_kg: self.weight_kg,
            length_cm: self.length_cm,
            birth_date: self.birth_date,
            submitted_at,
        }
    }
}

fn parse_number(field: DraftField, raw: &str) -> GuessResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GuessError::invalid(field, format!("not a number: {:?}", raw)))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(GuessError::invalid(field, format!("must be positive, got {}", raw.trim())));
    }
    Ok(value)
}

fn parse_weight(raw: &str) -> GuessResult<f64> {
    parse_number(DraftField::WeightKg, raw)
}

/// Integer centimetres; fractional input is truncated
fn parse_length(raw: &str) -> GuessResult<u32> {
    let value = parse_number(DraftField::LengthCm, raw)?.trunc();
    if value < 1.0 || value > u32::MAX as f64 {
        return Err(GuessError::invalid(
            DraftField::LengthCm,
            format!("out of range: {}", raw.trim()),
        ));
    }
    Ok(value as u32)
}

fn parse_birth_date(raw: &str) -> GuessResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        GuessError::invalid(DraftField::BirthDate, format!("expected YYYY-MM-DD, got {:?}", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Draft {
        Draft {
            guesser_name: " Ana ".to_string(),
            sex: "feminino".to_string(),
            weight_kg: "3.4".to_string(),
            length_cm: "50".to_string(),
            birth_date: "2024-03-07".to_string(),
        }
    }

    #[test]
    fn test_missing_fields() {
        let mut draft = complete();
        assert!(draft.is_complete());

        draft.set(DraftField::Sex, "");
        draft.set(DraftField::BirthDate, "   ");
        assert_eq!(
            draft.missing_fields(),
            vec![DraftField::Sex, DraftField::BirthDate]
        );
    }

    #[test]
    fn test_set_and_clear() {
        let mut draft = Draft::new();
        draft.set(DraftField::WeightKg, "3.2");
        assert_eq!(draft.get(DraftField::WeightKg), "3.2");
        assert!(!draft.is_empty());

        draft.clear();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_parse_complete_draft() {
        let parsed = complete().parse().unwrap();
        assert_eq!(parsed.guesser_name, "Ana");
        assert_eq!(parsed.sex, Sex::Female);
        assert_eq!(parsed.weight_kg, 3.4);
        assert_eq!(parsed.length_cm, 50);
        assert_eq!(parsed.birth_date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
    }

    #[test]
    fn test_length_truncates_fraction() {
        let draft = Draft {
            length_cm: "48.7".to_string(),
            ..complete()
        };
        assert_eq!(draft.parse().unwrap().length_cm, 48);
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        let draft = Draft {
            weight_kg: "abc".to_string(),
            ..complete()
        };
        assert!(matches!(
            draft.parse(),
            Err(GuessError::InvalidField { field: DraftField::WeightKg, .. })
        ));

        let draft = Draft {
            length_cm: "-3".to_string(),
            ..complete()
        };
        assert!(matches!(
            draft.parse(),
            Err(GuessError::InvalidField { field: DraftField::LengthCm, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_date_and_sex() {
        let draft = Draft {
            birth_date: "07/03/2024".to_string(),
            ..complete()
        };
        assert!(matches!(
            draft.parse(),
            Err(GuessError::InvalidField { field: DraftField::BirthDate, .. })
        ));

        let draft = Draft {
            sex: "talvez".to_string(),
            ..complete()
        };
        assert!(matches!(
            draft.parse(),
            Err(GuessError::InvalidField { field: DraftField::Sex, .. })
        ));
    }

    #[test]
    fn test_form_bounds() {
        let bounds = FormBounds::default();
        assert!(bounds.weight_in_bounds(1.0));
        assert!(bounds.weight_in_bounds(6.0));
        assert!(!bounds.weight_in_bounds(6.5));
        assert!(bounds.length_in_bounds(30));
        assert!(!bounds.length_in_bounds(71));
    }
}
