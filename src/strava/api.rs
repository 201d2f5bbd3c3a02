use curl::easy::{Easy, List};
use serde_json::Value;

use crate::config::StravaConfig;
use crate::data_types::strava::athlete::AthleteTokens;
use crate::error::SummaryError;
use crate::strava::auth::Auth;

const STRAVA_BASE_URL: &str = "https://www.strava.com/api/v3/";

pub struct StravaApi {
    auth: Auth,
}

impl StravaApi {
    /// Authenticates immediately; a failed token grant surfaces here, not
    /// on the first listing call.
    pub fn new(config: StravaConfig) -> Result<Self, SummaryError> {
        Ok(Self {
            auth: Auth::new(config)?,
        })
    }

    pub(crate) fn refresh_tokens(
        config: &StravaConfig,
        refresh_token: &str,
    ) -> Result<AthleteTokens, SummaryError> {
        let mut handle = Easy::new();

        let params = format!(
            "client_id={}&client_secret={}&\
             grant_type=refresh_token&\
             refresh_token={}",
            config.client_id, config.client_secret, refresh_token
        );

        handle.url(&(STRAVA_BASE_URL.to_string() + "oauth/token?" + &params))?;
        handle.post(true)?;

        let buffer = StravaApi::perform(&mut handle)?;
        let status = handle.response_code()?;

        if status != 200 {
            return Err(SummaryError::Remote {
                status,
                message: StravaApi::remote_message(&buffer),
            });
        }

        Ok(serde_json::from_slice(&buffer)?)
    }

    fn perform(handle: &mut Easy) -> Result<Vec<u8>, SummaryError> {
        let mut buffer = Vec::new();

        {
            let mut transfer = handle.transfer();

            transfer.write_function(|data| {
                buffer.extend_from_slice(data);
                Ok(data.len())
            })?;

            transfer.perform()?;
        }

        Ok(buffer)
    }

    fn get_request(bearer: &str, url: &str) -> Result<Value, SummaryError> {
        let mut handle = Easy::new();
        let mut list = List::new();

        list.append(&format!("Authorization: Bearer {}", bearer))?;
        handle.http_headers(list)?;

        handle.get(true)?;
        handle.url(url)?;

        let buffer = StravaApi::perform(&mut handle)?;
        let status = handle.response_code()?;

        if status != 200 {
            return Err(SummaryError::Remote {
                status,
                message: StravaApi::remote_message(&buffer),
            });
        }

        Ok(serde_json::from_slice(&buffer)?)
    }

    // Strava error bodies carry a "message" field next to the "errors" list.
    fn remote_message(buffer: &[u8]) -> String {
        if let Ok(body) = serde_json::from_slice::<Value>(buffer) {
            if let Some(message) = body.get("message").and_then(Value::as_str) {
                return message.to_string();
            }
        }

        String::from_utf8_lossy(buffer).into_owned()
    }

    /// One page of the athlete's activity listing.
    pub fn list_athlete_activities(
        &mut self,
        per_page: usize,
        page: usize,
    ) -> Result<Vec<Value>, SummaryError> {
        self.auth.refresh_if_expired()?;

        let result = StravaApi::get_request(
            self.auth.access_token(),
            &(STRAVA_BASE_URL.to_string()
                + &format!("athlete/activities?per_page={}&page={}", per_page, page)),
        )?;

        match result {
            Value::Array(items) => Ok(items),
            other => Err(SummaryError::Remote {
                status: 200,
                message: format!("expected an activity array, got: {}", other),
            }),
        }
    }
}
