use async_trait::async_trait;
use org_core_db::repository::delete_batch::DeleteBatch;
use uuid::Uuid;

use super::repo_impl::DepartmentRepositoryImpl;

#[async_trait]
impl DeleteBatch for DepartmentRepositoryImpl {
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        let mut rows = self.rows.write();
        Ok(ids.iter().filter(|id| rows.remove(id).is_some()).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::organization::department_repository::test_utils::create_test_department;
    use org_core_db::repository::{create_batch::CreateBatch, load::Load};

    #[tokio::test]
    async fn test_delete_batch_counts_removed_rows() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = DepartmentRepositoryImpl::new();
        let a = create_test_department("A", None);
        let b = create_test_department("B", None);
        repo.create_batch(vec![a.clone(), b.clone()]).await?;

        let removed = repo.delete_batch(&[a.id, Uuid::new_v4()]).await?;
        assert_eq!(removed, 1);
        assert!(repo.load(a.id).await.is_err());
        assert!(repo.load(b.id).await.is_ok());
        Ok(())
    }
}
