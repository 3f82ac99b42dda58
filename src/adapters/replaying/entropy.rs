//! Replaying adapter for the `EntropySource` port.

use std::sync::Mutex;

use crate::error::Error;
use crate::ports::EntropySource;

/// Serves a fixed byte sequence in order, then fails.
///
/// Makes generation deterministic in tests and lets the exhaustion path
/// stand in for a broken operating-system source.
pub struct ReplayingEntropy {
    state: Mutex<Replay>,
}

struct Replay {
    bytes: Vec<u8>,
    cursor: usize,
}

impl ReplayingEntropy {
    /// Creates a source that replays `bytes`.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { state: Mutex::new(Replay { bytes: bytes.into(), cursor: 0 }) }
    }

    /// Number of bytes not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        let state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.bytes.len() - state.cursor
    }
}

impl EntropySource for ReplayingEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let end = state.cursor + dest.len();
        if end > state.bytes.len() {
            return Err(Error::EntropySource(format!(
                "replay exhausted: {} bytes requested, {} left",
                dest.len(),
                state.bytes.len() - state.cursor
            )));
        }
        dest.copy_from_slice(&state.bytes[state.cursor..end]);
        state.cursor = end;
        Ok(())
    }
}
