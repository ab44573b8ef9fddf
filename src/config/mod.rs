//! Configuration management for Mail9

use anyhow::{Context, Result};
use std::env;
use url::Url;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SMTP relay and sender identity
    pub smtp: SmtpConfig,
    /// OAuth2 client material for the token endpoint
    pub oauth: OAuthConfig,
    /// Base URL of the user-facing portal that reset/verification links point at
    pub portal_url: String,
}

/// SMTP configuration for email sending
#[derive(Debug, Clone, Validate)]
pub struct SmtpConfig {
    /// SMTP relay host
    #[validate(length(min = 1, max = 255))]
    pub host: String,

    /// SMTP relay port (typically 587 for STARTTLS)
    pub port: u16,

    /// Use STARTTLS (plain connection only for local test relays)
    pub use_tls: bool,

    /// From email address, also the XOAUTH2 username
    #[validate(email)]
    pub from_email: String,

    /// From display name (optional)
    pub from_name: Option<String>,
}

/// OAuth2 client configuration for the refresh-token grant
#[derive(Debug, Clone, Validate)]
pub struct OAuthConfig {
    /// Token endpoint the refresh grant is posted to
    #[validate(length(min = 1))]
    pub token_url: String,

    /// OAuth2 client id
    #[validate(length(min = 1))]
    pub client_id: String,

    /// OAuth2 client secret
    #[validate(length(min = 1))]
    pub client_secret: String,

    /// Redirect URI the client was registered with
    #[validate(length(min = 1))]
    pub redirect_uri: String,

    /// Long-lived refresh token used to mint access tokens
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let config = Self {
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .context("Invalid SMTP_PORT")?,
                use_tls: env::var("SMTP_USE_TLS")
                    .map(|s| s.to_lowercase() != "false")
                    .unwrap_or(true),
                from_email: env::var("MAIL_FROM_EMAIL").context("MAIL_FROM_EMAIL is required")?,
                from_name: env::var("MAIL_FROM_NAME").ok(),
            },
            oauth: OAuthConfig {
                token_url: env::var("OAUTH_TOKEN_URL")
                    .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
                client_id: env::var("OAUTH_CLIENT_ID").context("OAUTH_CLIENT_ID is required")?,
                client_secret: env::var("OAUTH_CLIENT_SECRET")
                    .context("OAUTH_CLIENT_SECRET is required")?,
                redirect_uri: env::var("OAUTH_REDIRECT_URI")
                    .unwrap_or_else(|_| "https://developers.google.com/oauthplayground".to_string()),
                refresh_token: env::var("OAUTH_REFRESH_TOKEN")
                    .context("OAUTH_REFRESH_TOKEN is required")?,
            },
            portal_url: env::var("MAIL9_PORTAL_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        };

        Url::parse(&config.oauth.token_url).context("Invalid OAUTH_TOKEN_URL")?;
        Url::parse(&config.portal_url).context("Invalid MAIL9_PORTAL_URL")?;

        config.smtp.validate().context("Invalid SMTP configuration")?;
        config.oauth.validate().context("Invalid OAuth configuration")?;

        Ok(config)
    }
}
