use async_trait::async_trait;
use org_core_db::models::activity::activity_entry::ActivityEntryModel;
use org_core_db::repository::append_activity::AppendActivity;

use super::repo_impl::ActivityEntryRepositoryImpl;

#[async_trait]
impl AppendActivity for ActivityEntryRepositoryImpl {
    async fn append(
        &self,
        entry: &ActivityEntryModel,
    ) -> Result<ActivityEntryModel, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = self.entries.write();
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(format!("activity entry {} already recorded", entry.id).into());
        }
        entries.push(entry.clone());
        Ok(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::activity::activity_entry_repository::test_utils::create_test_entry;
    use org_core_db::models::activity::activity_event::ActivityEvent;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_append_records_in_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = ActivityEntryRepositoryImpl::new();
        let subject_id = Uuid::new_v4();

        let first = create_test_entry(subject_id, ActivityEvent::Created);
        let second = create_test_entry(subject_id, ActivityEvent::Updated);
        repo.append(&first).await?;
        repo.append(&second).await?;

        assert_eq!(repo.len(), 2);
        let entries = repo.entries.read();
        assert_eq!(entries[0].id, first.id);
        assert_eq!(entries[1].id, second.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_append_rejects_duplicate_entry_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = ActivityEntryRepositoryImpl::new();
        let entry = create_test_entry(Uuid::new_v4(), ActivityEvent::Created);

        repo.append(&entry).await?;
        assert!(repo.append(&entry).await.is_err());
        assert_eq!(repo.len(), 1);
        Ok(())
    }
}
