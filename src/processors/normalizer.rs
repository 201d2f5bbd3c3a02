use chrono::Datelike;

use crate::data_types::strava::activity::Activity;
use crate::data_types::summary::record::ActivityRecord;
use crate::util::DateTimeUtils;

/// Turns raw entries into the uniform activity table. Rows whose start
/// timestamp does not parse keep `None` date fields and stay in the table;
/// they only drop out of date-keyed views.
pub fn normalize(raw_activities: Vec<Activity>) -> Vec<ActivityRecord> {
    raw_activities
        .into_iter()
        .enumerate()
        .map(|(index, raw)| normalize_one(index, raw))
        .collect()
}

fn normalize_one(index: usize, raw: Activity) -> ActivityRecord {
    let start = DateTimeUtils::parse_start_date(&raw.start_date_local);

    ActivityRecord {
        // Export rows carry no id column; the 1-based row position stands in.
        id: raw.id.unwrap_or(index as i64 + 1),
        name: raw.name,
        sport_type: raw.sport_type,

        year: start.map(|datetime| datetime.year()),
        week: start.map(|datetime| datetime.iso_week().week()),
        date: start.map(|datetime| datetime.date()),
        start_date_local: start,

        distance_km: raw.distance / 1000.0,
        distance_m: raw.distance,
        moving_time_min: raw.moving_time / 60.0,
        moving_time_s: raw.moving_time,
        elevation_gain_m: raw.total_elevation_gain,
        avg_speed_kmh: raw.average_speed.map(|mps| mps * 3.6),
        avg_speed_mps: raw.average_speed,
        max_speed_kmh: raw.max_speed * 3.6,
        max_speed_mps: raw.max_speed,
        avg_heartrate: raw.average_heartrate,
        max_heartrate: raw.max_heartrate,
    }
}
