use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The acting principal on whose behalf a lifecycle transition runs.
///
/// Passed explicitly into every logging call instead of being resolved from
/// process-global session state, so callers and tests control exactly who
/// the causer of a recorded activity is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Type tag of the acting identity (e.g. `person`, `system`)
    pub causer_type: HeaplessString<50>,
    pub causer_id: Uuid,
}

impl Principal {
    pub fn new(causer_type: &str, causer_id: Uuid) -> Result<Self, String> {
        Ok(Self {
            causer_type: HeaplessString::try_from(causer_type)
                .map_err(|_| format!("causer type '{causer_type}' is too long (max 50 chars)"))?,
            causer_id,
        })
    }

    /// Principal for a person identity, the common case.
    pub fn person(causer_id: Uuid) -> Self {
        Self {
            causer_type: HeaplessString::try_from("person").unwrap_or_default(),
            causer_id,
        }
    }
}
