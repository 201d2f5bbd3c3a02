use chrono::{Duration, NaiveDate};

use crate::data_types::summary::record::ActivityRecord;
use crate::data_types::summary::stats::{Metric, MetricComparison, PeriodWindow};
use crate::error::SummaryError;

/// The window of identical length in calendar days ending the day before
/// `start`. No gap, no overlap.
pub fn previous_window(start: NaiveDate, end: NaiveDate) -> PeriodWindow {
    let length_days = (end - start).num_days();
    let prior_end = start - Duration::days(1);

    PeriodWindow {
        start: prior_end - Duration::days(length_days),
        end: prior_end,
    }
}

/// Sums distance, moving time and elevation gain over [start, end] and over
/// the preceding window, one comparison unit per metric. Requires
/// `start < end`; equal endpoints count as an invalid range. An empty
/// cohort yields an empty result.
pub fn compare_periods(
    cohort: &[&ActivityRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<MetricComparison>, SummaryError> {
    if start >= end {
        return Err(SummaryError::InvalidDateRange { start, end });
    }

    if cohort.is_empty() {
        return Ok(Vec::new());
    }

    let current = PeriodWindow { start, end };
    let previous = previous_window(start, end);

    Ok(Metric::COMPARED
        .into_iter()
        .map(|metric| {
            let current_sum = window_sum(cohort, metric, &current);
            let previous_sum = window_sum(cohort, metric, &previous);

            // A zero previous sum has no meaningful percent change.
            let change_pct = if previous_sum == 0.0 {
                None
            } else {
                Some((current_sum - previous_sum) / previous_sum * 100.0)
            };

            MetricComparison {
                metric: metric.label(),
                previous: previous_sum,
                current: current_sum,
                change_pct,
            }
        })
        .collect())
}

fn window_sum(cohort: &[&ActivityRecord], metric: Metric, window: &PeriodWindow) -> f64 {
    cohort
        .iter()
        .filter(|record| match record.date {
            Some(date) => date >= window.start && date <= window.end,
            None => false,
        })
        .filter_map(|record| metric.value_of(record))
        .sum()
}
