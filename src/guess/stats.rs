//! Summary statistics
//!
//! Derived on every render from the current record list. Pure: no caching,
//! no side effects, the input slice is never mutated.

use serde::Serialize;

use crate::guess::types::{GuessRecord, Sex};

/// Number of guesses per sex. Unrecognized values are in neither bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SexCounts {
    pub male: usize,
    pub female: usize,
}

/// One labelled value of a chart series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
}

/// Aggregates over the whole record list
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    pub count_by_sex: SexCounts,
    /// Mean weight rounded to two decimals, 0 when there are no records
    pub average_weight_kg: f64,
    /// Mean length rounded to two decimals, 0 when there are no records
    pub average_length_cm: f64,
}

impl SummaryStats {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Series for the proportion chart
    pub fn sex_distribution(&self) -> [ChartSlice; 2] {
        [
            ChartSlice {
                label: Sex::Male.label(),
                value: self.count_by_sex.male as f64,
            },
            ChartSlice {
                label: Sex::Female.label(),
                value: self.count_by_sex.female as f64,
            },
        ]
    }

    /// Series for the averages bar chart
    pub fn averages(&self) -> [ChartSlice; 2] {
        [
            ChartSlice {
                label: "Peso Médio",
                value: self.average_weight_kg,
            },
            ChartSlice {
                label: "Tamanho Médio",
                value: self.average_length_cm,
            },
        ]
    }
}

/// Compute counts by sex and rounded averages
pub fn compute_statistics(records: &[GuessRecord]) -> SummaryStats {
    if records.is_empty() {
        return SummaryStats::default();
    }

    let mut counts = SexCounts::default();
    let mut weight_sum = 0.0;
    let mut length_sum = 0.0;

    for record in records {
        match record.sex {
            Sex::Male => counts.male += 1,
            Sex::Female => counts.female += 1,
            Sex::Unrecognized => {}
        }
        weight_sum += record.weight_kg;
        length_sum += f64::from(record.length_cm);
    }

    let n = records.len() as f64;
    SummaryStats {
        total: records.len(),
        count_by_sex: counts,
        average_weight_kg: round2(weight_sum / n),
        average_length_cm: round2(length_sum / n),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::types::RecordId;
    use chrono::NaiveDate;

    fn record(id: u64, sex: Sex, weight_kg: f64, length_cm: u32) -> GuessRecord {
        GuessRecord {
            id: RecordId(id),
            guesser_name: format!("guest-{}", id),
            sex,
            weight_kg,
            length_cm,
            birth_date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            submitted_at: "01/03/2024, 09:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_list() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.count_by_sex, SexCounts { male: 0, female: 0 });
        assert_eq!(stats.average_weight_kg, 0.0);
        assert_eq!(stats.average_length_cm, 0.0);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_averages() {
        let records = vec![
            record(1, Sex::Male, 3.0, 48),
            record(2, Sex::Female, 3.4, 52),
        ];
        let stats = compute_statistics(&records);

        assert_eq!(stats.average_weight_kg, 3.2);
        assert_eq!(stats.average_length_cm, 50.0);
        assert_eq!(stats.count_by_sex, SexCounts { male: 1, female: 1 });
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let records = vec![
            record(1, Sex::Male, 3.1, 49),
            record(2, Sex::Male, 3.2, 50),
            record(3, Sex::Male, 3.3, 50),
        ];
        let stats = compute_statistics(&records);

        assert_eq!(stats.average_weight_kg, 3.2);
        assert_eq!(stats.average_length_cm, 49.67);
    }

    #[test]
    fn test_unrecognized_sex_excluded_from_counts() {
        let records = vec![
            record(1, Sex::Male, 3.0, 50),
            record(2, Sex::Unrecognized, 3.0, 50),
            record(3, Sex::Female, 3.0, 50),
            record(4, Sex::Female, 3.0, 50),
        ];
        let stats = compute_statistics(&records);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.count_by_sex, SexCounts { male: 1, female: 2 });
    }

    #[test]
    fn test_does_not_mutate_input() {
        let records = vec![record(1, Sex::Female, 2.9, 47)];
        let before = records.clone();
        let _ = compute_statistics(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_chart_series() {
        let stats = compute_statistics(&[
            record(1, Sex::Male, 3.0, 48),
            record(2, Sex::Male, 3.4, 52),
        ]);

        let sexes = stats.sex_distribution();
        assert_eq!(sexes[0].label, "Masculino");
        assert_eq!(sexes[0].value, 2.0);
        assert_eq!(sexes[1].value, 0.0);

        let averages = stats.averages();
        assert_eq!(averages[0].value, 3.2);
        assert_eq!(averages[1].value, 50.0);
    }
}
