use heapless::String as HeaplessString;
use org_core_db::models::activity::activity_event::ActivityEvent;
use org_core_db::models::organization::department::DepartmentModel;
use org_core_db::repository::find_activities_by_subject::FindActivitiesBySubject;
use org_core_db::repository::pagination::PageRequest;
use org_core_db::utils::hash_as_i64;
use org_core_memory::test_helper::setup_test_context;

fn department(name: &str) -> DepartmentModel {
    DepartmentModel::new(HeaplessString::try_from(name).unwrap(), None)
}

#[tokio::test]
async fn test_created_entry_carries_snapshot_causer_and_description() {
    let ctx = setup_test_context();
    let created = ctx
        .service
        .create(department("Operations"), &ctx.principal)
        .await
        .unwrap();

    let entries = ctx.activities().entries_snapshot();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];

    assert_eq!(entry.event, ActivityEvent::Created);
    assert_eq!(entry.subject_type.as_str(), "department");
    assert_eq!(entry.subject_id, created.id);
    assert_eq!(entry.causer_type.as_str(), "person");
    assert_eq!(entry.causer_id, ctx.principal.causer_id);
    assert_eq!(entry.body.as_str(), "Department created");
    assert_eq!(entry.log_name.as_str(), "default");
    assert_eq!(entry.properties["name"], "Operations");
    assert_eq!(entry.properties["parent_path"], "/");
}

#[tokio::test]
async fn test_updated_entry_properties_hold_old_new_pairs_with_sorted_keys() {
    let ctx = setup_test_context();
    let created = ctx
        .service
        .create(department("Operations"), &ctx.principal)
        .await
        .unwrap();

    let mut renamed = created.clone();
    renamed.name = HeaplessString::try_from("Ops").unwrap();
    ctx.service.update(renamed, &ctx.principal).await.unwrap();

    let entries = ctx.activities().entries_snapshot();
    let entry = entries.last().unwrap();
    assert_eq!(entry.event, ActivityEvent::Updated);
    assert_eq!(entry.properties["name"]["old"], "Operations");
    assert_eq!(entry.properties["name"]["new"], "Ops");

    let keys: Vec<&String> = entry.properties.as_object().unwrap().keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[tokio::test]
async fn test_entry_hash_matches_content_with_hash_zeroed() {
    let ctx = setup_test_context();
    ctx.service
        .create(department("Operations"), &ctx.principal)
        .await
        .unwrap();

    let entries = ctx.activities().entries_snapshot();
    let entry = &entries[0];
    assert_ne!(entry.hash, 0);

    let mut zeroed = entry.clone();
    zeroed.hash = 0;
    assert_eq!(entry.hash, hash_as_i64(&zeroed).unwrap());
}

#[tokio::test]
async fn test_subject_history_pages_in_recording_order() {
    let ctx = setup_test_context();
    let created = ctx
        .service
        .create(department("Operations"), &ctx.principal)
        .await
        .unwrap();

    let mut renamed = created.clone();
    renamed.name = HeaplessString::try_from("Ops").unwrap();
    ctx.service.update(renamed, &ctx.principal).await.unwrap();
    ctx.service.delete(created.id, &ctx.principal).await.unwrap();

    let page = ctx
        .activities()
        .find_by_subject(created.id, PageRequest::new(2, 0))
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items[0].event, ActivityEvent::Created);
    assert_eq!(page.items[1].event, ActivityEvent::Updated);
    assert!(page.has_more());

    let rest = ctx
        .activities()
        .find_by_subject(created.id, PageRequest::new(2, 2))
        .await
        .unwrap();
    assert_eq!(rest.items[0].event, ActivityEvent::SoftDeleted);
}
