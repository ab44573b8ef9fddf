//! OAuth2 access token acquisition
//!
//! Mints short-lived access tokens from a long-lived refresh token, the way
//! hosted mail providers require for XOAUTH2 SMTP authentication. Tokens are
//! minted fresh per send and never cached.

pub mod client;
pub mod types;

pub use client::{AccessTokenBroker, OAuthTokenClient};
pub use types::AccessToken;
