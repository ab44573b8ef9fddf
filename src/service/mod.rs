//! Business logic layer

pub mod mailer;

pub use mailer::{EmailProviderFactory, MailerService};
