use chrono::{NaiveDate, NaiveDateTime};
use serde_derive::Serialize;

use crate::data_types::common::{ActivityId, Identifiable};

/// One normalized activity row. Raw units are kept next to the converted
/// ones so both the overview (raw sums) and the per-activity tables
/// (km / km/h / min) read straight from the record.
///
/// The date-derived fields are `None` when `start_date_local` did not
/// parse; such rows stay in the table but drop out of every year- or
/// date-keyed view.
#[derive(Debug, Serialize, Clone)]
pub struct ActivityRecord {
    pub id: ActivityId,
    pub name: String,
    pub sport_type: String,

    pub start_date_local: Option<NaiveDateTime>,
    pub year: Option<i32>,
    pub week: Option<u32>,
    pub date: Option<NaiveDate>,

    pub distance_m: f64,
    pub distance_km: f64,
    pub moving_time_s: f64,
    pub moving_time_min: f64,
    pub elevation_gain_m: f64,
    pub avg_speed_mps: Option<f64>,
    pub avg_speed_kmh: Option<f64>,
    pub max_speed_mps: f64,
    pub max_speed_kmh: f64,
    pub avg_heartrate: Option<f64>,
    pub max_heartrate: Option<f64>,
}

impl Identifiable for ActivityRecord {
    fn as_i64(&self) -> ActivityId {
        self.id
    }
}
