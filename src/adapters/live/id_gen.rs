//! Live adapters for the `IdGenerator` port used as benchmark baselines.

use crate::adapters::live::entropy::OsEntropy;
use crate::generator::entropy_failure;
use crate::identifier::Uuid;
use crate::ports::{EntropySource, IdGenerator};

/// Generates identifiers with the `uuid` crate's `Uuid::new_v4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCrateGenerator;

impl IdGenerator for UuidCrateGenerator {
    fn name(&self) -> &'static str {
        "uuid-crate"
    }

    fn generate(&self) -> Uuid {
        Uuid::from(uuid::Uuid::new_v4())
    }
}

/// Asks the operating system for 16 fresh bytes on every call.
///
/// Same output distribution as [`crate::Generator`] without the shared
/// buffer, so the difference in throughput is the cost of the system call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnbufferedGenerator;

impl IdGenerator for UnbufferedGenerator {
    fn name(&self) -> &'static str {
        "unbuffered"
    }

    fn generate(&self) -> Uuid {
        let mut bytes = [0u8; 16];
        if let Err(err) = OsEntropy.fill(&mut bytes) {
            entropy_failure(&err);
        }
        Uuid::from_random_bytes(bytes)
    }
}
