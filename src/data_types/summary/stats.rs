use chrono::NaiveDate;
use serde_derive::Serialize;

use super::record::ActivityRecord;

/// The fixed metric set shown on the per-activity performance views.
/// Order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    AvgSpeed,
    MaxSpeed,
    Distance,
    MovingTime,
    ElevationGain,
    AvgHeartrate,
    MaxHeartrate,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::AvgSpeed,
        Metric::MaxSpeed,
        Metric::Distance,
        Metric::MovingTime,
        Metric::ElevationGain,
        Metric::AvgHeartrate,
        Metric::MaxHeartrate,
    ];

    /// Subset aggregated by the period comparator.
    pub const COMPARED: [Metric; 3] = [Metric::Distance, Metric::MovingTime, Metric::ElevationGain];

    pub fn key(&self) -> &'static str {
        match self {
            Metric::AvgSpeed => "avg_speed_kmh",
            Metric::MaxSpeed => "max_speed_kmh",
            Metric::Distance => "distance_km",
            Metric::MovingTime => "moving_time_min",
            Metric::ElevationGain => "elevation_gain_m",
            Metric::AvgHeartrate => "avg_hr",
            Metric::MaxHeartrate => "max_hr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::AvgSpeed => "Avg Speed (km/h)",
            Metric::MaxSpeed => "Max Speed (km/h)",
            Metric::Distance => "Distance (km)",
            Metric::MovingTime => "Moving Time (min)",
            Metric::ElevationGain => "Elevation Gain (m)",
            Metric::AvgHeartrate => "Avg HR (bpm)",
            Metric::MaxHeartrate => "Max HR (bpm)",
        }
    }

    pub fn from_key(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|metric| metric.key() == key)
    }

    /// The record's value for this metric, in display units. `None` when
    /// the source had no value for it; callers skip the record for that
    /// metric only.
    pub fn value_of(&self, record: &ActivityRecord) -> Option<f64> {
        match self {
            Metric::AvgSpeed => record.avg_speed_kmh,
            Metric::MaxSpeed => Some(record.max_speed_kmh),
            Metric::Distance => Some(record.distance_km),
            Metric::MovingTime => Some(record.moving_time_min),
            Metric::ElevationGain => Some(record.elevation_gain_m),
            Metric::AvgHeartrate => record.avg_heartrate,
            Metric::MaxHeartrate => record.max_heartrate,
        }
    }
}

/// One row of the sport x year overview table. Sums stay in the source
/// units, exactly as exported.
#[derive(Debug, Serialize, Clone, Default)]
pub struct SportYearSummary {
    pub sport_type: String,
    pub year: i32,
    pub total_distance_m: f64,
    pub total_moving_time_s: f64,
    pub total_elevation_gain_m: f64,
    pub max_speed_mps: f64,
}

/// A selected record's standing within its cohort for one metric.
/// Rank 1 is the cohort best; ties share the rank.
#[derive(Debug, Serialize, Clone)]
pub struct MetricScore {
    pub metric: &'static str,
    pub value: f64,
    pub rank: usize,
    pub percentile: f64,
}

/// One vertex of the radial profile: percentile as magnitude, metric as
/// angular category.
#[derive(Debug, Serialize, Clone)]
pub struct RadialPoint {
    pub metric: &'static str,
    pub percentile: f64,
}

/// Inclusive calendar window.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Previous-vs-current sums for one comparator metric. `change_pct` is
/// `None` ("not applicable") when the previous period sums to zero.
#[derive(Debug, Serialize, Clone)]
pub struct MetricComparison {
    pub metric: &'static str,
    pub previous: f64,
    pub current: f64,
    pub change_pct: Option<f64>,
}
