use crate::data_types::summary::record::ActivityRecord;
use crate::data_types::summary::stats::{Metric, MetricScore, RadialPoint};

/// Scores one selected record against its cohort, metric by metric.
///
/// Rank counts strictly greater values plus one, so the cohort maximum is
/// always rank 1 and tied values share a rank. Percentile is the share of
/// cohort values strictly below the selected one, on a 0-100 scale, with
/// no tie adjustment. Metrics with no value on the selected record, or no
/// values at all in the cohort, are left out of the result.
pub fn score_against_cohort(
    cohort: &[&ActivityRecord],
    selected: &ActivityRecord,
) -> Vec<MetricScore> {
    let mut scores = Vec::new();

    for metric in Metric::ALL {
        let value = match metric.value_of(selected) {
            Some(value) => value,
            None => continue,
        };

        let cohort_values: Vec<f64> = cohort
            .iter()
            .filter_map(|record| metric.value_of(record))
            .collect();

        if cohort_values.is_empty() {
            continue;
        }

        let greater = cohort_values.iter().filter(|&&v| v > value).count();
        let lesser = cohort_values.iter().filter(|&&v| v < value).count();

        scores.push(MetricScore {
            metric: metric.label(),
            value,
            rank: greater + 1,
            percentile: lesser as f64 / cohort_values.len() as f64 * 100.0,
        });
    }

    scores
}

/// Maps the scores onto the radial profile: percentile as magnitude, one
/// vertex per surviving metric, first vertex repeated at the end so the
/// polygon closes.
pub fn radial_profile(scores: &[MetricScore]) -> Vec<RadialPoint> {
    let mut points: Vec<RadialPoint> = scores
        .iter()
        .map(|score| RadialPoint {
            metric: score.metric,
            percentile: score.percentile,
        })
        .collect();

    if let Some(first) = points.first().cloned() {
        points.push(first);
    }

    points
}
