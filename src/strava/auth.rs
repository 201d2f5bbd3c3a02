use chrono::Utc;

use crate::config::StravaConfig;
use crate::data_types::strava::athlete::AthleteTokens;
use crate::error::SummaryError;
use crate::logln;
use crate::strava::api::StravaApi;

/// Holds the bearer token obtained through the refresh_token grant.
/// Construction performs the first refresh, so an `Auth` always carries a
/// usable token.
pub struct Auth {
    config: StravaConfig,
    tokens: AthleteTokens,
}

impl Auth {
    const CC: &str = "Auth";

    pub fn new(config: StravaConfig) -> Result<Self, SummaryError> {
        let tokens = StravaApi::refresh_tokens(&config, &config.refresh_token)?;

        if tokens.access_token.is_empty() {
            return Err(SummaryError::Remote {
                status: 200,
                message: "token endpoint returned an empty access token".to_string(),
            });
        }

        logln!("Bearer token obtained, expires at {}", tokens.expires_at);

        Ok(Self { config, tokens })
    }

    pub fn refresh_if_expired(&mut self) -> Result<(), SummaryError> {
        let current_ts: i64 = Utc::now().timestamp();

        if current_ts > self.tokens.expires_at {
            logln!("Tokens EXPIRED. Refreshing");

            self.tokens = StravaApi::refresh_tokens(&self.config, &self.tokens.refresh_token)?;
        }

        Ok(())
    }

    pub fn access_token(&self) -> &str {
        &self.tokens.access_token
    }
}
