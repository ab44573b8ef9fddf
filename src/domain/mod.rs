//! Domain models for Mail9

pub mod email;

pub use email::*;
