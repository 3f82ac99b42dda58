//! Live adapter for the `EntropySource` port.

use crate::error::Error;
use crate::ports::EntropySource;

/// Entropy drawn from the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), Error> {
        getrandom::getrandom(dest).map_err(|e| Error::EntropySource(e.to_string()))
    }
}
