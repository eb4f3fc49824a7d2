use serde::Serialize;

use super::identifiable::Identifiable;

/// Trait for entities whose lifecycle transitions are recorded as activity
/// entries.
///
/// Soft-delete support is declared as an associated const so event routing
/// is resolved at compile time instead of probing the instance at runtime.
pub trait ActivityTracked: Identifiable + Serialize {
    /// Whether deletion of this entity type is a reversible trash operation
    const SUPPORTS_SOFT_DELETE: bool = false;

    /// Stable type tag stored on log entries for this entity type
    /// (snake_case, e.g. `department`, `job_position`)
    fn subject_type() -> &'static str;

    /// Whether this instance currently sits in the trash.
    /// Only meaningful when `SUPPORTS_SOFT_DELETE` is true.
    fn is_trashed(&self) -> bool {
        false
    }
}
