pub mod local;
pub mod strava_sync;
