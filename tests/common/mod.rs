//! Common test utilities

use mail9::config::{Config, OAuthConfig, SmtpConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// OAuth configuration pointed at a mock token endpoint
pub fn test_oauth_config(token_url: &str) -> OAuthConfig {
    OAuthConfig {
        token_url: token_url.to_string(),
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_uri: "https://developers.google.com/oauthplayground".to_string(),
        refresh_token: "test-refresh".to_string(),
    }
}

/// Full configuration pointed at a mock token endpoint
pub fn test_config(token_url: &str) -> Config {
    Config {
        smtp: SmtpConfig {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            use_tls: true,
            from_email: "noreply@example.com".to_string(),
            from_name: Some("Example Shop".to_string()),
        },
        oauth: test_oauth_config(token_url),
        portal_url: "https://app.example.com".to_string(),
    }
}

/// Mount a token endpoint at `/token` returning a valid access token
pub async fn mount_token_endpoint(server: &MockServer, expected_hits: u64) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.mock-access-token",
            "expires_in": 3599,
            "token_type": "Bearer",
            "scope": "https://mail.google.com/"
        })))
        .expect(expected_hits)
        .mount(server)
        .await;
}
