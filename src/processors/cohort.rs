use chrono::NaiveDate;

use crate::data_types::summary::record::ActivityRecord;

/// Predicate set narrowing the table to the cohort in scope. Predicates
/// intersect; filter order never changes the result. An empty cohort is a
/// valid outcome and is returned as an empty vec, not an error.
#[derive(Debug, Clone, Default)]
pub struct CohortFilter {
    pub sport_types: Option<Vec<String>>,
    pub year: Option<i32>,
    /// Inclusive on both ends, compared on the calendar-date component.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl CohortFilter {
    pub fn apply<'a>(&self, table: &'a [ActivityRecord]) -> Vec<&'a ActivityRecord> {
        table.iter().filter(|record| self.matches(record)).collect()
    }

    fn matches(&self, record: &ActivityRecord) -> bool {
        if let Some(sports) = &self.sport_types {
            if !sports.iter().any(|sport| sport == &record.sport_type) {
                return false;
            }
        }

        if let Some(year) = self.year {
            // Rows without a parsed timestamp have no year and never match.
            if record.year != Some(year) {
                return false;
            }
        }

        if let Some((start, end)) = self.date_range {
            match record.date {
                Some(date) => {
                    if date < start || date > end {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}
