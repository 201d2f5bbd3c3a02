use std::collections::HashMap;

use crate::data_types::summary::record::ActivityRecord;
use crate::data_types::summary::stats::{Metric, SportYearSummary};

/// Sport x year aggregation over the whole table: summed distance, moving
/// time and elevation gain, max of max speed, in source units. Rows without
/// a parsed year have no group key and are left out.
pub fn overview(table: &[ActivityRecord]) -> Vec<SportYearSummary> {
    let mut groups: HashMap<(String, i32), SportYearSummary> = HashMap::new();

    for record in table {
        let year = match record.year {
            Some(year) => year,
            None => continue,
        };

        let entry = groups
            .entry((record.sport_type.clone(), year))
            .or_insert_with(|| SportYearSummary {
                sport_type: record.sport_type.clone(),
                year,
                ..Default::default()
            });

        entry.total_distance_m += record.distance_m;
        entry.total_moving_time_s += record.moving_time_s;
        entry.total_elevation_gain_m += record.elevation_gain_m;

        if record.max_speed_mps > entry.max_speed_mps {
            entry.max_speed_mps = record.max_speed_mps;
        }
    }

    let mut rows: Vec<SportYearSummary> = groups.into_values().collect();
    rows.sort_by(|a, b| a.sport_type.cmp(&b.sport_type).then(a.year.cmp(&b.year)));

    rows
}

/// The cohort's best `count` activities by one metric, best first. Records
/// without a value for the metric are skipped.
pub fn top_activities(
    cohort: &[&ActivityRecord],
    metric: Metric,
    count: usize,
) -> Vec<ActivityRecord> {
    let mut ranked: Vec<(&ActivityRecord, f64)> = cohort
        .iter()
        .filter_map(|record| metric.value_of(record).map(|value| (*record, value)))
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .into_iter()
        .take(count)
        .map(|(record, _)| record.clone())
        .collect()
}
