use strava_summary::data_types::strava::activity::Activity;
use strava_summary::data_types::summary::record::ActivityRecord;
use strava_summary::processors::normalizer::normalize;
use strava_summary::processors::statistics::{radial_profile, score_against_cohort};

fn ride_km(distance_km: f64) -> Activity {
    Activity {
        sport_type: "Ride".to_string(),
        start_date_local: "2024-01-08T07:30:00Z".to_string(),
        distance: distance_km * 1000.0,
        moving_time: 3600.0,
        max_speed: 10.0,
        ..Default::default()
    }
}

fn distance_score(
    cohort: &[&ActivityRecord],
    selected: &ActivityRecord,
) -> (f64, usize, f64) {
    let scores = score_against_cohort(cohort, selected);
    let score = scores
        .iter()
        .find(|score| score.metric == "Distance (km)")
        .expect("distance metric present");

    (score.value, score.rank, score.percentile)
}

#[test]
fn tied_maximum_ranks_first_with_one_third_percentile() {
    // Cohort distances 10, 20, 20 km; select one of the 20s.
    let table = normalize(vec![ride_km(10.0), ride_km(20.0), ride_km(20.0)]);
    let cohort: Vec<&ActivityRecord> = table.iter().collect();

    let (value, rank, percentile) = distance_score(&cohort, &table[1]);

    assert!((value - 20.0).abs() < 1e-9);
    assert_eq!(rank, 1, "maximum always ranks 1, ties included");
    assert!(
        (percentile - 100.0 / 3.0).abs() < 1e-6,
        "one of three values is strictly below: got {}",
        percentile
    );
}

#[test]
fn both_tied_records_get_the_same_rank() {
    let table = normalize(vec![ride_km(10.0), ride_km(20.0), ride_km(20.0)]);
    let cohort: Vec<&ActivityRecord> = table.iter().collect();

    let (_, first_rank, first_pct) = distance_score(&cohort, &table[1]);
    let (_, second_rank, second_pct) = distance_score(&cohort, &table[2]);

    assert_eq!(first_rank, second_rank);
    assert!((first_pct - second_pct).abs() < 1e-9);

    // Ranks are not a permutation of 1..n: the 10 km ride sits at rank 3.
    let (_, low_rank, _) = distance_score(&cohort, &table[0]);
    assert_eq!(low_rank, 3);
}

#[test]
fn the_minimum_always_scores_percentile_zero() {
    // Even when every other value ties with it.
    let table = normalize(vec![ride_km(5.0), ride_km(5.0), ride_km(5.0)]);
    let cohort: Vec<&ActivityRecord> = table.iter().collect();

    for record in &table {
        let (_, rank, percentile) = distance_score(&cohort, record);

        assert_eq!(rank, 1, "all-tied cohort shares rank 1");
        assert_eq!(percentile, 0.0, "nothing is strictly below the minimum");
    }
}

#[test]
fn rank_one_exactly_for_the_cohort_maximum() {
    let table = normalize(vec![ride_km(12.0), ride_km(30.0), ride_km(7.5)]);
    let cohort: Vec<&ActivityRecord> = table.iter().collect();

    for record in &table {
        let (value, rank, _) = distance_score(&cohort, record);

        if (value - 30.0).abs() < 1e-9 {
            assert_eq!(rank, 1);
        } else {
            assert!(rank > 1, "non-maximum must not rank 1");
        }
    }
}

#[test]
fn null_heart_rate_drops_the_record_from_that_table_only() {
    let with_hr = Activity {
        average_heartrate: Some(140.0),
        ..ride_km(10.0)
    };
    let without_hr = ride_km(20.0);

    let table = normalize(vec![with_hr, without_hr]);
    let cohort: Vec<&ActivityRecord> = table.iter().collect();

    // The record without HR gets no Avg HR row...
    let scores = score_against_cohort(&cohort, &table[1]);
    assert!(scores.iter().all(|score| score.metric != "Avg HR (bpm)"));

    // ...but still scores on the other metrics.
    assert!(scores.iter().any(|score| score.metric == "Distance (km)"));
    assert!(scores.iter().any(|score| score.metric == "Max Speed (km/h)"));

    // The record with HR ranks within a one-value HR cohort.
    let scores = score_against_cohort(&cohort, &table[0]);
    let hr_score = scores
        .iter()
        .find(|score| score.metric == "Avg HR (bpm)")
        .expect("avg hr present");
    assert_eq!(hr_score.rank, 1);
    assert_eq!(hr_score.percentile, 0.0);
}

#[test]
fn metrics_with_no_cohort_values_are_omitted_entirely() {
    // No record carries heart rate or average speed.
    let table = normalize(vec![ride_km(10.0), ride_km(20.0)]);
    let cohort: Vec<&ActivityRecord> = table.iter().collect();

    let scores = score_against_cohort(&cohort, &table[0]);
    let labels: Vec<&str> = scores.iter().map(|score| score.metric).collect();

    assert!(!labels.contains(&"Avg HR (bpm)"));
    assert!(!labels.contains(&"Max HR (bpm)"));
    assert!(!labels.contains(&"Avg Speed (km/h)"));

    // Only the metrics with values survive, in display order.
    assert_eq!(
        labels,
        vec![
            "Max Speed (km/h)",
            "Distance (km)",
            "Moving Time (min)",
            "Elevation Gain (m)"
        ]
    );
}

#[test]
fn empty_cohort_scores_to_an_empty_result() {
    let table = normalize(vec![ride_km(10.0)]);
    let selected = &table[0];

    let scores = score_against_cohort(&[], selected);

    assert!(scores.is_empty());
}

#[test]
fn radial_profile_closes_the_polygon() {
    let table = normalize(vec![ride_km(10.0), ride_km(20.0), ride_km(15.0)]);
    let cohort: Vec<&ActivityRecord> = table.iter().collect();

    let scores = score_against_cohort(&cohort, &table[2]);
    let points = radial_profile(&scores);

    assert_eq!(points.len(), scores.len() + 1, "first vertex repeated at the end");
    assert_eq!(points.first().map(|p| p.metric), points.last().map(|p| p.metric));
    assert_eq!(
        points.first().map(|p| p.percentile),
        points.last().map(|p| p.percentile)
    );

    // Magnitudes are the percentiles on the 0-100 scale.
    for (point, score) in points.iter().zip(scores.iter()) {
        assert_eq!(point.percentile, score.percentile);
        assert!((0.0..=100.0).contains(&point.percentile));
    }
}

#[test]
fn radial_profile_of_nothing_is_empty() {
    assert!(radial_profile(&[]).is_empty());
}
