//! Token endpoint payload types

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Successful token endpoint response (RFC 6749 section 5.1)
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Error body returned by the token endpoint (RFC 6749 section 5.2)
#[derive(Debug, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Short-lived access credential, minted fresh for each send
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub secret: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn from_response(response: TokenResponse) -> Self {
        Self {
            secret: response.access_token,
            expires_at: Utc::now() + chrono::Duration::seconds(response.expires_in),
        }
    }

    /// Whether the token can still be presented to the relay
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
