use async_trait::async_trait;
use org_core_db::models::activity::activity_entry::ActivityEntryModel;
use org_core_db::repository::load_batch::LoadBatch;
use uuid::Uuid;

use super::repo_impl::ActivityEntryRepositoryImpl;

#[async_trait]
impl LoadBatch<ActivityEntryModel> for ActivityEntryRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<ActivityEntryModel>>, Box<dyn std::error::Error + Send + Sync>> {
        let entries = self.entries.read();
        Ok(ids
            .iter()
            .map(|id| entries.iter().find(|entry| entry.id == *id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::activity::activity_entry_repository::test_utils::create_test_entry;
    use org_core_db::models::activity::activity_event::ActivityEvent;
    use org_core_db::repository::append_activity::AppendActivity;

    #[tokio::test]
    async fn test_load_batch_by_entry_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = ActivityEntryRepositoryImpl::new();
        let entry = create_test_entry(Uuid::new_v4(), ActivityEvent::Created);
        repo.append(&entry).await?;

        let loaded = repo.load_batch(&[entry.id, Uuid::new_v4()]).await?;
        assert_eq!(loaded[0].as_ref().map(|e| e.id), Some(entry.id));
        assert!(loaded[1].is_none());
        Ok(())
    }
}
