//! Replaying adapters that serve recorded data.

pub mod entropy;

pub use entropy::ReplayingEntropy;
