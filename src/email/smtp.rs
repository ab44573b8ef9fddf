//! SMTP email provider implementation using lettre
//!
//! Authenticates with XOAUTH2: the sender address is the username and a
//! freshly minted OAuth2 access token is the secret. The transport is built
//! for a single dispatch and dropped afterwards.

use super::provider::{EmailProvider, EmailProviderError};
use crate::config::SmtpConfig;
use crate::domain::{EmailMessage, SendReceipt};
use crate::oauth::AccessToken;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::{Credentials, Mechanism},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// SMTP-based email provider holding a one-shot XOAUTH2 transport
pub struct SmtpEmailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_email: String,
    from_name: Option<String>,
}

impl SmtpEmailProvider {
    /// Create a provider from configuration and a freshly minted access token
    pub fn with_access_token(
        config: &SmtpConfig,
        token: &AccessToken,
    ) -> Result<Self, EmailProviderError> {
        if token.is_expired() {
            return Err(EmailProviderError::InvalidConfiguration(
                "Access token is already expired".to_string(),
            ));
        }

        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| EmailProviderError::InvalidConfiguration(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.from_email.clone(),
                token.secret.clone(),
            ))
            .authentication(vec![Mechanism::Xoauth2])
            .build();

        Ok(Self {
            transport,
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })
    }

    fn build_from_mailbox(&self) -> Result<Mailbox, EmailProviderError> {
        let mailbox = if let Some(name) = &self.from_name {
            format!("{} <{}>", name, self.from_email)
        } else {
            self.from_email.clone()
        };

        mailbox.parse().map_err(|e| {
            EmailProviderError::InvalidConfiguration(format!("Invalid from address: {}", e))
        })
    }

    fn classify_transport_error(e: lettre::transport::smtp::Error) -> EmailProviderError {
        let error_msg = e.to_string();
        if error_msg.contains("authentication") || error_msg.contains("AUTH") {
            EmailProviderError::AuthenticationFailed(error_msg)
        } else if error_msg.contains("connection") || error_msg.contains("timeout") {
            EmailProviderError::ConnectionError(error_msg)
        } else {
            EmailProviderError::SendFailed(error_msg)
        }
    }
}

#[async_trait]
impl EmailProvider for SmtpEmailProvider {
    async fn send(&self, message: &EmailMessage) -> Result<SendReceipt, EmailProviderError> {
        let from = self.build_from_mailbox()?;

        // Build recipient list
        let mut to_list = Vec::new();
        for addr in &message.to {
            let mailbox: Mailbox = if let Some(name) = &addr.name {
                format!("{} <{}>", name, addr.email)
            } else {
                addr.email.clone()
            }
            .parse()
            .map_err(|e| {
                EmailProviderError::InvalidConfiguration(format!("Invalid to address: {}", e))
            })?;
            to_list.push(mailbox);
        }

        if to_list.is_empty() {
            return Err(EmailProviderError::InvalidConfiguration(
                "No recipients specified".to_string(),
            ));
        }

        let mut email_builder = Message::builder().from(from).subject(&message.subject);

        for to in to_list {
            email_builder = email_builder.to(to);
        }

        let email = email_builder
            .header(ContentType::TEXT_PLAIN)
            .body(message.text_body.clone())
            .map_err(|e| EmailProviderError::SendFailed(e.to_string()))?;

        match self.transport.send(email).await {
            Ok(response) => {
                // Get the first message from the response
                let message_id = response.message().next().map(|s| s.to_string());
                Ok(SendReceipt::new(message_id))
            }
            Err(e) => Err(Self::classify_transport_error(e)),
        }
    }

    async fn test_connection(&self) -> Result<(), EmailProviderError> {
        self.transport
            .test_connection()
            .await
            .map(|_| ()) // Convert bool to ()
            .map_err(Self::classify_transport_error)
    }

    fn provider_name(&self) -> &'static str {
        "smtp-xoauth2"
    }
}
