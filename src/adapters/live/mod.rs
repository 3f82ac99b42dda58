//! Live adapters backed by the operating system and ecosystem crates.

pub mod entropy;
pub mod id_gen;

pub use entropy::OsEntropy;
pub use id_gen::{UnbufferedGenerator, UuidCrateGenerator};
