use crate::data_types::strava::activity::Activity;
use crate::error::SummaryError;
use crate::strava::api::StravaApi;
use crate::{logln, logvbln};

pub struct StravaSync;

impl StravaSync {
    const CC: &str = "Sync";

    /// Pages through the athlete's activity listing until an empty page
    /// comes back, concatenating the items. Entries that do not map onto
    /// the raw activity shape are logged and skipped; a transport or API
    /// error aborts the whole fetch.
    pub fn fetch_all_activities(
        api: &mut StravaApi,
        per_page: usize,
    ) -> Result<Vec<Activity>, SummaryError> {
        let mut all_activities: Vec<Activity> = Vec::new();
        let mut page = 1;

        loop {
            let items = api.list_athlete_activities(per_page, page)?;

            if items.is_empty() {
                break;
            }

            logvbln!("page {}: {} entries", page, items.len());

            for item in items {
                match serde_json::from_value::<Activity>(item) {
                    Ok(activity) => all_activities.push(activity),
                    Err(err) => logln!("Skipping malformed activity entry: {}", err),
                }
            }

            page += 1;
        }

        logln!("Fetched {} activities over {} pages", all_activities.len(), page - 1);

        Ok(all_activities)
    }
}
