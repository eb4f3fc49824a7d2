use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use crate::models::activity::activity_event::{
    deserialize_activity_event, serialize_activity_event, ActivityEvent,
};
use crate::models::identifiable::Identifiable;

/// # Documentation
/// One activity entry per lifecycle transition with a non-empty change set.
/// Entries are append-only: never updated or deleted by this subsystem.
///
/// `properties` holds the changed-field → {old, new} mapping (or the full
/// attribute snapshot for `created`), deep key-sorted before persistence so
/// the serialized form is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityEntryModel {
    pub id: Uuid,

    #[serde(
        serialize_with = "serialize_activity_event",
        deserialize_with = "deserialize_activity_event"
    )]
    pub event: ActivityEvent,

    /// Type tag of the entity the entry describes
    pub subject_type: HeaplessString<50>,
    pub subject_id: Uuid,

    /// Acting principal; required, an entry is never recorded without one
    pub causer_type: HeaplessString<50>,
    pub causer_id: Uuid,

    /// Changed-field mapping or created snapshot, key-sorted
    pub properties: serde_json::Value,

    /// Rendered human-readable description
    pub body: HeaplessString<255>,

    /// Fixed channel tag
    pub log_name: HeaplessString<50>,

    pub recorded_at: DateTime<Utc>,

    /// Hash of the entry with this field set to 0, computed at append time.
    /// Non-zero once recorded; lets readers detect tampering.
    pub hash: i64,
}

impl Identifiable for ActivityEntryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
