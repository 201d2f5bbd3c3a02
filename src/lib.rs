use chrono::NaiveDate;

use config::{Settings, StravaConfig};
use data_types::common::{ActivityId, Identifiable};
use data_types::strava::activity::Activity;
use data_types::summary::record::ActivityRecord;
use data_types::summary::stats::{
    Metric, MetricComparison, MetricScore, RadialPoint, SportYearSummary,
};
use error::SummaryError;
use processors::cohort::CohortFilter;
use sources::strava_sync::StravaSync;
use strava::api::StravaApi;

pub mod config;
pub mod data_types;
pub mod error;
pub mod processors;
pub mod sources;
pub mod strava;
pub mod util;

/// The dashboard snapshot: one normalized activity table, loaded once from
/// a single source. Every view is a pure recomputation over this table, so
/// calls are deterministic and order-independent.
pub struct App {
    activities: Vec<ActivityRecord>,
}

impl App {
    const CC: &str = "App";

    pub fn from_records(raw_activities: Vec<Activity>) -> Self {
        Self {
            activities: processors::normalizer::normalize(raw_activities),
        }
    }

    pub fn from_local_file(path: &str) -> Result<Self, SummaryError> {
        let raw_activities = sources::local::load_activities(path)?;
        let app = Self::from_records(raw_activities);

        crate::logln!("Loaded {} activities from {}", app.activities.len(), path);

        Ok(app)
    }

    pub fn from_strava(config: StravaConfig) -> Result<Self, SummaryError> {
        util::logging::set_global_level(util::logging::LogLevel::VERBOSE);

        let per_page = config.per_page;
        let mut api = StravaApi::new(config)?;

        let raw_activities = StravaSync::fetch_all_activities(&mut api, per_page)?;

        Ok(Self::from_records(raw_activities))
    }

    /// Picks the configured source; the local file wins when both are set.
    pub fn from_settings(settings: &Settings, settings_path: &str) -> Result<Self, SummaryError> {
        if let Some(path) = &settings.data_file {
            return Self::from_local_file(path);
        }

        if let Some(strava) = &settings.strava {
            return Self::from_strava(strava.clone());
        }

        Err(SummaryError::NoSource {
            path: settings_path.to_string(),
        })
    }

    pub fn activities(&self) -> &[ActivityRecord] {
        &self.activities
    }

    pub fn activity(&self, id: ActivityId) -> Option<&ActivityRecord> {
        self.activities.iter().find(|record| record.as_i64() == id)
    }

    pub fn overview(&self) -> Vec<SportYearSummary> {
        processors::overview::overview(&self.activities)
    }

    pub fn top_activities(
        &self,
        filter: &CohortFilter,
        metric: Metric,
        count: usize,
    ) -> Vec<ActivityRecord> {
        let cohort = filter.apply(&self.activities);

        processors::overview::top_activities(&cohort, metric, count)
    }

    /// Rank/percentile table for one record within the filtered cohort.
    /// `None` when the record is not part of the cohort.
    pub fn performance(&self, filter: &CohortFilter, id: ActivityId) -> Option<Vec<MetricScore>> {
        let cohort = filter.apply(&self.activities);
        let selected = cohort.iter().copied().find(|record| record.as_i64() == id)?;

        Some(processors::statistics::score_against_cohort(&cohort, selected))
    }

    pub fn radial(&self, filter: &CohortFilter, id: ActivityId) -> Option<Vec<RadialPoint>> {
        self.performance(filter, id)
            .map(|scores| processors::statistics::radial_profile(&scores))
    }

    pub fn compare(
        &self,
        filter: &CohortFilter,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MetricComparison>, SummaryError> {
        let cohort = filter.apply(&self.activities);

        processors::comparator::compare_periods(&cohort, start, end)
    }
}
