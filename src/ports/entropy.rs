//! Entropy port for drawing cryptographically secure random bytes.

use crate::error::Error;

/// Fills buffers with cryptographically secure random bytes.
///
/// Abstracting the entropy source allows deterministic generation by
/// substituting a recorded byte stream during tests.
pub trait EntropySource: Send + Sync {
    /// Fills `dest` completely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropySource`] when the source cannot supply bytes.
    /// Callers must not use any part of `dest` after a failure.
    fn fill(&self, dest: &mut [u8]) -> Result<(), Error>;
}
