use async_trait::async_trait;
use org_core_db::models::activity::activity_entry::ActivityEntryModel;
use org_core_db::repository::find_activities_by_subject::FindActivitiesBySubject;
use org_core_db::repository::pagination::{Page, PageRequest};
use uuid::Uuid;

use super::repo_impl::ActivityEntryRepositoryImpl;

#[async_trait]
impl FindActivitiesBySubject for ActivityEntryRepositoryImpl {
    async fn find_by_subject(
        &self,
        subject_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<ActivityEntryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let entries = self.entries.read();
        let matching: Vec<&ActivityEntryModel> = entries
            .iter()
            .filter(|entry| entry.subject_id == subject_id)
            .collect();

        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect();

        Ok(Page::new(items, total, page.limit, page.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::activity::activity_entry_repository::test_utils::create_test_entry;
    use org_core_db::models::activity::activity_event::ActivityEvent;
    use org_core_db::repository::append_activity::AppendActivity;

    #[tokio::test]
    async fn test_find_by_subject_pages_in_recording_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = ActivityEntryRepositoryImpl::new();
        let subject_id = Uuid::new_v4();
        let other_subject = Uuid::new_v4();

        let events = [
            ActivityEvent::Created,
            ActivityEvent::Updated,
            ActivityEvent::SoftDeleted,
        ];
        for event in events {
            repo.append(&create_test_entry(subject_id, event)).await?;
        }
        repo.append(&create_test_entry(other_subject, ActivityEvent::Created))
            .await?;

        let page = repo.find_by_subject(subject_id, PageRequest::new(2, 0)).await?;
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].event, ActivityEvent::Created);
        assert_eq!(page.items[1].event, ActivityEvent::Updated);
        assert!(page.has_more());

        let rest = repo.find_by_subject(subject_id, PageRequest::new(2, 2)).await?;
        assert_eq!(rest.items.len(), 1);
        assert_eq!(rest.items[0].event, ActivityEvent::SoftDeleted);
        assert!(!rest.has_more());
        Ok(())
    }
}
