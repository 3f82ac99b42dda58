//! Port implementations.
//!
//! `live` talks to the operating system and ecosystem crates; `replaying`
//! serves fixed data for deterministic tests.

pub mod live;
pub mod replaying;
