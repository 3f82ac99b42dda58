//! Error type shared by parsing, entropy adapters and configuration.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text is not a 36-character hyphenated hex UUID.
    #[error("invalid UUID format")]
    InvalidFormat,
    /// The entropy source could not produce random bytes.
    #[error("entropy source failure: {0}")]
    EntropySource(String),
    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
