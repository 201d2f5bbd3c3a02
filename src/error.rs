use chrono::NaiveDate;
use thiserror::Error;

/// Input and remote failures. Data-level gaps (missing metric, null value,
/// empty cohort, zero prior-period sum) are absorbed where they occur and
/// never reach this enum.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("cannot read activity export {path}: {source}")]
    MalformedExport {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read settings {path}: {message}")]
    Settings { path: String, message: String },

    #[error("no data source configured: set data_file or [strava] in {path}")]
    NoSource { path: String },

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid date range: start {start} must be before end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid date range: provide both start and end")]
    IncompleteDateRange,

    #[error("unknown metric `{0}`")]
    UnknownMetric(String),

    #[error("strava returned {status}: {message}")]
    Remote { status: u32, message: String },

    #[error("http transfer failed: {0}")]
    Http(#[from] curl::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}
