//! ID generator port for producing random identifiers.

use crate::identifier::Uuid;

/// Generates version 4 identifiers.
///
/// The benchmark command runs every implementation through this trait so
/// competing strategies are measured the same way.
pub trait IdGenerator: Send + Sync {
    /// Short label used when reporting results.
    fn name(&self) -> &'static str;

    /// Generates a new random identifier.
    fn generate(&self) -> Uuid;
}
