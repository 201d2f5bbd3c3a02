use serde_derive::{Deserialize, Serialize};

/// Token set returned by the oauth/token refresh grant.
#[derive(Deserialize, Debug, Serialize, Clone)]
pub struct AthleteTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}
