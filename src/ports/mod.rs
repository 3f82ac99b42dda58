//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the identifier core and
//! something it does not control (operating-system randomness, competing
//! generator implementations). Implementations live in `src/adapters/`.

pub mod entropy;
pub mod id_gen;

pub use entropy::EntropySource;
pub use id_gen::IdGenerator;
