//! OAuth2 token endpoint client
//!
//! Performs the refresh-token grant against the identity provider's token
//! endpoint. Every call mints a new token; callers that want reuse must hold
//! on to the returned [`AccessToken`] themselves.

use crate::config::OAuthConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::types::{AccessToken, TokenErrorResponse, TokenResponse};

/// Seam for minting access tokens, injectable for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessTokenBroker: Send + Sync {
    /// Mint a short-lived access token
    async fn fetch_access_token(&self) -> Result<AccessToken>;
}

/// Token endpoint client speaking the refresh-token grant
#[derive(Clone)]
pub struct OAuthTokenClient {
    config: OAuthConfig,
    http_client: Client,
}

impl OAuthTokenClient {
    /// Create a new token client
    pub fn new(config: OAuthConfig) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    fn grant_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("grant_type", "refresh_token"),
            ("client_id", &self.config.client_id),
            ("client_secret", &self.config.client_secret),
            ("refresh_token", &self.config.refresh_token),
            ("redirect_uri", &self.config.redirect_uri),
        ]
    }
}

#[async_trait]
impl AccessTokenBroker for OAuthTokenClient {
    async fn fetch_access_token(&self) -> Result<AccessToken> {
        tracing::debug!("Requesting access token from {}", self.config.token_url);

        let response = self
            .http_client
            .post(&self.config.token_url)
            .form(&self.grant_params())
            .send()
            .await
            .map_err(|e| {
                AppError::TokenEndpoint(format!("Failed to reach token endpoint: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            // Token endpoints report failures as {"error", "error_description"}
            let detail = serde_json::from_str::<TokenErrorResponse>(&body)
                .map(|e| e.error_description.unwrap_or(e.error))
                .unwrap_or(body);
            return Err(AppError::TokenEndpoint(format!(
                "Token exchange failed: {} - {}",
                status, detail
            )));
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            AppError::TokenEndpoint(format!("Failed to parse token response: {}", e))
        })?;

        Ok(AccessToken::from_response(token_response))
    }
}
