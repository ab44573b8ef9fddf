//! Email delivery for Mail9
//!
//! Provides the provider seam and the SMTP/XOAUTH2 implementation used to
//! submit messages to a hosted relay.

pub mod provider;
pub mod smtp;

pub use provider::{EmailProvider, EmailProviderError};
pub use smtp::SmtpEmailProvider;
