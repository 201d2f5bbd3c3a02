use chrono::NaiveDate;

use strava_summary::data_types::strava::activity::Activity;
use strava_summary::processors::normalizer::normalize;

fn raw(sport: &str, date: &str, distance: f64) -> Activity {
    Activity {
        name: format!("{} on {}", sport, date),
        sport_type: sport.to_string(),
        start_date_local: date.to_string(),
        distance,
        moving_time: 3600.0,
        total_elevation_gain: 100.0,
        max_speed: 10.0,
        ..Default::default()
    }
}

#[test]
fn unit_conversions_are_deterministic() {
    let records = normalize(vec![Activity {
        average_speed: Some(5.0),
        ..raw("Ride", "2024-01-08T07:30:00Z", 12340.0)
    }]);

    let record = &records[0];

    assert!((record.distance_km - 12.34).abs() < 1e-9, "distance m -> km");
    assert!((record.moving_time_min - 60.0).abs() < 1e-9, "seconds -> minutes");
    assert!((record.max_speed_kmh - 36.0).abs() < 1e-9, "m/s -> km/h");
    assert!(
        (record.avg_speed_kmh.expect("avg speed present") - 18.0).abs() < 1e-9,
        "avg m/s -> km/h"
    );
}

#[test]
fn date_fields_are_derived_from_the_local_timestamp() {
    let records = normalize(vec![raw("Ride", "2024-01-08T07:30:00Z", 1000.0)]);

    let record = &records[0];

    assert_eq!(record.year, Some(2024));
    assert_eq!(record.week, Some(2), "2024-01-08 is ISO week 2");
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 8));
}

#[test]
fn space_separated_and_date_only_timestamps_parse_too() {
    let records = normalize(vec![
        raw("Run", "2023-06-01 18:05:00", 1000.0),
        raw("Run", "2023-06-02", 1000.0),
    ]);

    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2023, 6, 1));
    assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2023, 6, 2));
}

#[test]
fn unparseable_timestamp_keeps_the_row_with_null_date_fields() {
    let records = normalize(vec![
        raw("Ride", "not a date", 1000.0),
        raw("Ride", "2024-01-08T07:30:00Z", 2000.0),
    ]);

    // The row stays in the table...
    assert_eq!(records.len(), 2);

    // ...but carries no derived date fields.
    assert_eq!(records[0].start_date_local, None);
    assert_eq!(records[0].year, None);
    assert_eq!(records[0].week, None);
    assert_eq!(records[0].date, None);
}

#[test]
fn missing_optional_metrics_stay_null_instead_of_defaulting() {
    let records = normalize(vec![raw("Ride", "2024-01-08T07:30:00Z", 1000.0)]);

    let record = &records[0];

    assert_eq!(record.avg_speed_mps, None);
    assert_eq!(record.avg_speed_kmh, None);
    assert_eq!(record.avg_heartrate, None);
    assert_eq!(record.max_heartrate, None);
}

#[test]
fn id_less_rows_get_their_one_based_position() {
    let records = normalize(vec![
        raw("Ride", "2024-01-08T07:30:00Z", 1000.0),
        Activity {
            id: Some(4399230),
            ..raw("Ride", "2024-01-09T07:30:00Z", 1000.0)
        },
        raw("Ride", "2024-01-10T07:30:00Z", 1000.0),
    ]);

    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].id, 4399230, "explicit ids win");
    assert_eq!(records[2].id, 3);
}
