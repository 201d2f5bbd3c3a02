use serde_derive::{Deserialize, Serialize};

use crate::data_types::common::ActivityId;

/// One raw activity entry, as supplied by either the paged API listing or a
/// local export row. Both sources carry a superset of these fields; unknown
/// fields are ignored and absent ones fall back to defaults so a partial
/// export still loads.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Activity {
    #[serde(default)]
    pub id: Option<ActivityId>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub sport_type: String,

    /// Local start timestamp as written by Strava, e.g. "2024-01-08T07:30:00Z".
    #[serde(default)]
    pub start_date_local: String,

    /// Meters.
    #[serde(default)]
    pub distance: f64,

    /// Seconds.
    #[serde(default)]
    pub moving_time: f64,

    /// Meters.
    #[serde(default)]
    pub total_elevation_gain: f64,

    /// Meters per second. Not present in the minimal export column set.
    #[serde(default)]
    pub average_speed: Option<f64>,

    /// Meters per second.
    #[serde(default)]
    pub max_speed: f64,

    /// Beats per minute, only for activities recorded with a sensor.
    #[serde(default)]
    pub average_heartrate: Option<f64>,

    #[serde(default)]
    pub max_heartrate: Option<f64>,
}
