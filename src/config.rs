use serde_derive::Deserialize;

use crate::error::SummaryError;

fn default_per_page() -> usize {
    30
}

/// Strava API credentials and paging. Supplied through the settings file,
/// never embedded in source.
#[derive(Deserialize, Debug, Clone)]
pub struct StravaConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,

    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    /// Local activity export to load instead of hitting the API.
    pub data_file: Option<String>,

    pub strava: Option<StravaConfig>,
}

impl Settings {
    pub fn from_file(path: &str) -> Result<Self, SummaryError> {
        let content = std::fs::read_to_string(path).map_err(|err| SummaryError::Settings {
            path: path.to_string(),
            message: err.to_string(),
        })?;

        toml::from_str(&content).map_err(|err| SummaryError::Settings {
            path: path.to_string(),
            message: err.to_string(),
        })
    }
}
