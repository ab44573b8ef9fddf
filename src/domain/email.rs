//! Email envelope domain types
//!
//! Request-scoped values only; nothing here outlives a single dispatch.

/// Email address with optional display name
#[derive(Debug, Clone)]
pub struct EmailAddress {
    pub email: String,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// Email message to be sent
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: Vec<EmailAddress>,
    pub subject: String,
    pub text_body: String,
}

impl EmailMessage {
    pub fn new(to: EmailAddress, subject: impl Into<String>, text_body: impl Into<String>) -> Self {
        Self {
            to: vec![to],
            subject: subject.into(),
            text_body: text_body.into(),
        }
    }
}

/// Delivery receipt for a message the relay accepted
///
/// Failures never produce a receipt; they surface as errors.
#[derive(Debug, Clone)]
pub struct SendReceipt {
    /// Message id reported by the relay, when it reports one
    pub message_id: Option<String>,
}

impl SendReceipt {
    pub fn new(message_id: Option<String>) -> Self {
        Self { message_id }
    }
}
