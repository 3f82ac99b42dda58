//! Buffered, thread-safe version 4 generator.
//!
//! Each [`Generator`] owns a block of random bytes drawn from its
//! [`EntropySource`] in one call and hands out 16-byte slices of it, so the
//! cost of asking the operating system for randomness is paid once per
//! `buffer_len / 16` identifiers instead of once per identifier.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::adapters::live::OsEntropy;
use crate::config::GenConfig;
use crate::error::Error;
use crate::identifier::Uuid;
use crate::ports::{EntropySource, IdGenerator};

const CHUNK: usize = 16;

/// Produces random (version 4, variant 1) identifiers.
///
/// Safe to share between threads: the buffer and cursor sit behind a mutex
/// that is held only while a chunk is copied out, plus the occasional refill.
///
/// ```
/// use uuidgen::Generator;
///
/// let gen = Generator::new();
/// let id = gen.new_v4();
/// assert_eq!(id.version(), 4);
/// ```
pub struct Generator {
    source: Box<dyn EntropySource>,
    pool: Mutex<Pool>,
}

struct Pool {
    bytes: Box<[u8]>,
    /// Offset of the next unserved byte; equal to `bytes.len()` when empty.
    cursor: usize,
}

impl Generator {
    /// Creates a generator backed by the operating system's CSPRNG with the
    /// default buffer length. The buffer is filled on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GenConfig::default())
    }

    /// Creates a generator backed by the operating system's CSPRNG.
    #[must_use]
    pub fn with_config(config: &GenConfig) -> Self {
        Self::with_source(Box::new(OsEntropy), config)
    }

    /// Creates a generator drawing from `source`.
    #[must_use]
    pub fn with_source(source: Box<dyn EntropySource>, config: &GenConfig) -> Self {
        let len = config.buffer_len();
        Self {
            source,
            pool: Mutex::new(Pool { bytes: vec![0u8; len].into_boxed_slice(), cursor: len }),
        }
    }

    /// Number of random bytes drawn from the source per refill.
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.lock_pool().bytes.len()
    }

    /// Returns a new random identifier.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source fails. There is no weaker fallback:
    /// identifiers built from bad randomness would break uniqueness.
    #[must_use]
    pub fn new_v4(&self) -> Uuid {
        Uuid::from_random_bytes(self.next_chunk())
    }

    fn next_chunk(&self) -> [u8; CHUNK] {
        let mut pool = self.lock_pool();
        if pool.cursor == pool.bytes.len() {
            if let Err(err) = self.source.fill(&mut pool.bytes) {
                entropy_failure(&err);
            }
            pool.cursor = 0;
            tracing::debug!(bytes = pool.bytes.len(), "refilled entropy buffer");
        }

        let start = pool.cursor;
        let end = start + CHUNK;
        let mut chunk = [0u8; CHUNK];
        chunk.copy_from_slice(&pool.bytes[start..end]);
        pool.bytes[start..end].fill(0);
        pool.cursor = end;
        chunk
    }

    fn lock_pool(&self) -> std::sync::MutexGuard<'_, Pool> {
        // A panic during refill leaves the cursor at the end of the buffer,
        // so a poisoned pool still never serves bytes from a failed fill.
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pool = self.lock_pool();
        f.debug_struct("Generator")
            .field("buffer_len", &pool.bytes.len())
            .field("cursor", &pool.cursor)
            .finish_non_exhaustive()
    }
}

impl IdGenerator for Generator {
    fn name(&self) -> &'static str {
        "buffered"
    }

    fn generate(&self) -> Uuid {
        self.new_v4()
    }
}

/// Logs an entropy failure and aborts the current operation.
#[cold]
#[track_caller]
pub(crate) fn entropy_failure(err: &Error) -> ! {
    tracing::error!(%err, "entropy source failed, refusing to generate identifiers");
    panic!("{err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::ReplayingEntropy;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn config(buffer_len: usize) -> GenConfig {
        GenConfig::new(buffer_len).unwrap()
    }

    #[test]
    fn deterministic_source_yields_known_identifiers() {
        let bytes: Vec<u8> = (0u8..32).collect();
        let gen = Generator::with_source(Box::new(ReplayingEntropy::new(bytes)), &config(32));

        assert_eq!(gen.new_v4().to_string(), "00010203-0405-4607-8809-0a0b0c0d0e0f");
        assert_eq!(gen.new_v4().to_string(), "10111213-1415-4617-9819-1a1b1c1d1e1f");
    }

    #[test]
    fn refills_only_when_buffer_is_spent() {
        let source = Arc::new(ReplayingEntropy::new(vec![0x5a; 96]));
        let gen = Generator::with_source(Box::new(SharedSource(Arc::clone(&source))), &config(48));

        assert_eq!(source.remaining(), 96, "buffer must be filled lazily");
        let _ = gen.new_v4();
        assert_eq!(source.remaining(), 48);
        let _ = gen.new_v4();
        let _ = gen.new_v4();
        assert_eq!(source.remaining(), 48);
        let _ = gen.new_v4();
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "entropy source failure")]
    fn exhausted_source_is_fatal() {
        let gen = Generator::with_source(Box::new(ReplayingEntropy::new(vec![1u8; 16])), &config(16));
        let _ = gen.new_v4();
        let _ = gen.new_v4();
    }

    #[test]
    fn failed_fill_is_never_served() {
        let gen = Generator::with_source(Box::new(FlakySource::default()), &config(16));

        let first = catch_unwind(AssertUnwindSafe(|| gen.new_v4()));
        assert!(first.is_err(), "first fill fails and must panic");

        let id = gen.new_v4();
        assert_eq!(id.to_string(), "11111111-1111-4111-9111-111111111111");
    }

    #[test]
    fn debug_reports_buffer_state() {
        let gen = Generator::with_source(Box::new(ReplayingEntropy::new(vec![0u8; 64])), &config(64));
        let _ = gen.new_v4();
        let debug = format!("{gen:?}");
        assert!(debug.contains("buffer_len: 64"), "{debug}");
        assert!(debug.contains("cursor: 16"), "{debug}");
    }

    #[test]
    fn default_uses_default_buffer_len() {
        let gen = Generator::default();
        assert_eq!(gen.buffer_len(), GenConfig::default().buffer_len());
        assert_eq!(IdGenerator::name(&gen), "buffered");
        assert_eq!(gen.generate().version(), 4);
    }

    struct SharedSource(Arc<ReplayingEntropy>);

    impl EntropySource for SharedSource {
        fn fill(&self, dest: &mut [u8]) -> Result<(), Error> {
            self.0.fill(dest)
        }
    }

    /// Scribbles over the buffer and fails once, then succeeds.
    #[derive(Default)]
    struct FlakySource {
        failed: AtomicBool,
    }

    impl EntropySource for FlakySource {
        fn fill(&self, dest: &mut [u8]) -> Result<(), Error> {
            if self.failed.swap(true, Ordering::SeqCst) {
                dest.fill(0x11);
                Ok(())
            } else {
                dest.fill(0xee);
                Err(Error::EntropySource("device busy".into()))
            }
        }
    }
}
