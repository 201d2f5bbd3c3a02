use std::path::Path;

use crate::data_types::strava::activity::Activity;
use crate::error::SummaryError;

/// Loads a local activity export. A missing file or a malformed row is an
/// input error naming the path; no partial table is returned.
pub fn load_activities(path: &str) -> Result<Vec<Activity>, SummaryError> {
    if !Path::new(path).exists() {
        return Err(SummaryError::FileNotFound {
            path: path.to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|source| SummaryError::MalformedExport {
        path: path.to_string(),
        source,
    })?;

    let mut activities = Vec::new();

    for row in reader.deserialize() {
        let activity: Activity = row.map_err(|source| SummaryError::MalformedExport {
            path: path.to_string(),
            source,
        })?;

        activities.push(activity);
    }

    Ok(activities)
}
