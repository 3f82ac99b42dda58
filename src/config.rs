//! Generator configuration read from the environment.

use std::env;

use crate::error::Error;

/// Environment variable overriding the entropy buffer length, in bytes.
pub const BUFFER_LEN_VAR: &str = "UUIDGEN_BUFFER_LEN";

/// Buffer length used when nothing else is configured (256 identifiers).
pub const DEFAULT_BUFFER_LEN: usize = 4096;

/// Largest accepted buffer length.
pub const MAX_BUFFER_LEN: usize = 1 << 20;

/// Settings for a [`crate::Generator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig {
    buffer_len: usize,
}

impl GenConfig {
    /// Builds a config with the given entropy buffer length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] unless `buffer_len` is a non-zero
    /// multiple of 16 no larger than [`MAX_BUFFER_LEN`].
    pub fn new(buffer_len: usize) -> Result<Self, Error> {
        if buffer_len == 0 || buffer_len % 16 != 0 {
            return Err(Error::InvalidConfig(format!(
                "buffer length must be a non-zero multiple of 16, got {buffer_len}"
            )));
        }
        if buffer_len > MAX_BUFFER_LEN {
            return Err(Error::InvalidConfig(format!(
                "buffer length must be at most {MAX_BUFFER_LEN}, got {buffer_len}"
            )));
        }
        Ok(Self { buffer_len })
    }

    /// Reads `UUIDGEN_BUFFER_LEN` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the variable is set but is not a
    /// valid buffer length.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if a value cannot be parsed or is out
    /// of range.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BUFFER_LEN_VAR) {
            None => Ok(Self::default()),
            Some(raw) => {
                let buffer_len = raw.trim().parse::<usize>().map_err(|e| {
                    Error::InvalidConfig(format!("{BUFFER_LEN_VAR}={raw:?}: {e}"))
                })?;
                Self::new(buffer_len)
            }
        }
    }

    /// Number of random bytes fetched per refill.
    #[must_use]
    pub const fn buffer_len(&self) -> usize {
        self.buffer_len
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self { buffer_len: DEFAULT_BUFFER_LEN }
    }
}
