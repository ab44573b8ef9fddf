//! Mailer service: the dispatch operation and the account notification senders

use crate::config::{Config, SmtpConfig};
use crate::domain::{EmailAddress, EmailMessage, SendReceipt};
use crate::email::{EmailProvider, EmailProviderError, SmtpEmailProvider};
use crate::error::{AppError, Result};
use crate::oauth::{AccessToken, AccessTokenBroker, OAuthTokenClient};
use std::sync::Arc;
use validator::Validate;

/// Factory for building an [`EmailProvider`] from configuration and a token.
///
/// This indirection keeps unit tests hermetic (no SMTP relay required).
#[cfg_attr(test, mockall::automock)]
pub trait EmailProviderFactory: Send + Sync {
    fn create(&self, config: &SmtpConfig, token: &AccessToken) -> Result<Box<dyn EmailProvider>>;
}

struct DefaultEmailProviderFactory;

impl EmailProviderFactory for DefaultEmailProviderFactory {
    fn create(&self, config: &SmtpConfig, token: &AccessToken) -> Result<Box<dyn EmailProvider>> {
        let provider = SmtpEmailProvider::with_access_token(config, token).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to create SMTP provider: {}", e))
        })?;
        Ok(Box::new(provider))
    }
}

/// Service for sending account emails
///
/// Mints a fresh access token and opens a one-shot delivery channel for
/// every dispatch; nothing is cached between calls. Every failure surfaces
/// as an error, so a resolved call means the relay accepted the message.
pub struct MailerService {
    config: Config,
    token_broker: Arc<dyn AccessTokenBroker>,
    provider_factory: Arc<dyn EmailProviderFactory>,
}

impl MailerService {
    /// Create a service from configuration
    pub fn new(config: Config) -> Result<Self> {
        let token_broker = Arc::new(OAuthTokenClient::new(config.oauth.clone()));
        Self::with_components(config, token_broker, Arc::new(DefaultEmailProviderFactory))
    }

    /// Create a service with explicit collaborators
    pub fn with_components(
        config: Config,
        token_broker: Arc<dyn AccessTokenBroker>,
        provider_factory: Arc<dyn EmailProviderFactory>,
    ) -> Result<Self> {
        config.smtp.validate()?;
        config.oauth.validate()?;

        Ok(Self {
            config,
            token_broker,
            provider_factory,
        })
    }

    /// Send one message: authenticate, open a delivery channel, submit
    pub async fn dispatch(
        &self,
        to: EmailAddress,
        subject: &str,
        body: &str,
    ) -> Result<SendReceipt> {
        let token = self.token_broker.fetch_access_token().await?;
        let provider = self.provider_factory.create(&self.config.smtp, &token)?;

        let message = EmailMessage::new(to, subject, body);
        let receipt = provider.send(&message).await.map_err(|e| match e {
            EmailProviderError::AuthenticationFailed(msg) => {
                AppError::Unauthorized(format!("SMTP authentication failed: {}", msg))
            }
            e => AppError::Internal(anyhow::anyhow!("Email send failed: {}", e)),
        })?;

        tracing::info!(
            provider = provider.provider_name(),
            message_id = receipt.message_id.as_deref().unwrap_or("-"),
            subject = subject,
            "Email dispatched"
        );

        Ok(receipt)
    }

    /// Send a password reset email
    pub async fn send_password_reset(&self, to_email: &str, token: &str) -> Result<SendReceipt> {
        let reset_url = format!(
            "{}/reset-password?token={}",
            self.config.portal_url.trim_end_matches('/'),
            token
        );
        let body = format!(
            "Dear user, to reset your password, click on this link: {}.\n\
            If you did not request any password reset, ignore this email.",
            reset_url
        );

        self.dispatch(EmailAddress::new(to_email), "Reset password", &body)
            .await
    }

    /// Send the confirmation for a completed password reset
    pub async fn send_password_reset_confirmation(&self, to_email: &str) -> Result<SendReceipt> {
        let body = "Your password has been reset successfully.\n\
            Do not hesitate to contact us if you have any questions.";

        self.dispatch(
            EmailAddress::new(to_email),
            "Password Reset Successfully",
            body,
        )
        .await
    }

    /// Send an email verification request
    pub async fn send_email_verification(&self, to_email: &str, token: &str) -> Result<SendReceipt> {
        let verification_url = format!(
            "{}/verify-email?token={}",
            self.config.portal_url.trim_end_matches('/'),
            token
        );
        let body = format!(
            "Dear user,\n\
            to verify your email, click on this link: {}.\n\
            If you did not create an account, then ignore this email.",
            verification_url
        );

        self.dispatch(EmailAddress::new(to_email), "Email Verification", &body)
            .await
    }

    /// Send a test email to verify the configuration works end-to-end
    pub async fn send_test_email(&self, to_email: &str) -> Result<SendReceipt> {
        let body = format!(
            "This is a test email from your Mail9 installation.\n\
            If you received this email, your mail configuration is working correctly.\n\n\
            Sent at: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );

        self.dispatch(EmailAddress::new(to_email), "Mail9 Test Email", &body)
            .await
    }

    /// Test the mail configuration by connecting to the relay
    pub async fn test_connection(&self) -> Result<()> {
        let token = self.token_broker.fetch_access_token().await?;
        let provider = self.provider_factory.create(&self.config.smtp, &token)?;

        provider.test_connection().await.map_err(|e| match e {
            EmailProviderError::AuthenticationFailed(msg) => {
                AppError::Unauthorized(format!("SMTP authentication failed: {}", msg))
            }
            EmailProviderError::InvalidConfiguration(msg) => {
                AppError::Validation(format!("Invalid configuration: {}", msg))
            }
            e => AppError::Internal(anyhow::anyhow!("{}", e)),
        })
    }
}
