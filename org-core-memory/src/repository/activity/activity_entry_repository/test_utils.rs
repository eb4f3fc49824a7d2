use chrono::Utc;
use heapless::String as HeaplessString;
use org_core_db::models::activity::activity_entry::ActivityEntryModel;
use org_core_db::models::activity::activity_event::ActivityEvent;
use serde_json::json;
use uuid::Uuid;

pub fn create_test_entry(subject_id: Uuid, event: ActivityEvent) -> ActivityEntryModel {
    ActivityEntryModel {
        id: Uuid::new_v4(),
        event,
        subject_type: HeaplessString::try_from("department").unwrap(),
        subject_id,
        causer_type: HeaplessString::try_from("person").unwrap(),
        causer_id: Uuid::new_v4(),
        properties: json!({"name": {"old": "Operations", "new": "Ops"}}),
        body: HeaplessString::try_from("Department updated").unwrap(),
        log_name: HeaplessString::try_from("default").unwrap(),
        recorded_at: Utc::now(),
        hash: 0,
    }
}
