use async_trait::async_trait;
use org_core_db::repository::exist_by_ids::ExistByIds;
use uuid::Uuid;

use super::repo_impl::DepartmentRepositoryImpl;

#[async_trait]
impl ExistByIds for DepartmentRepositoryImpl {
    async fn exist_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = self.rows.read();
        Ok(ids.iter().map(|id| (*id, rows.contains_key(id))).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::organization::department_repository::test_utils::create_test_department;
    use org_core_db::repository::create_batch::CreateBatch;

    #[tokio::test]
    async fn test_exist_by_ids() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = DepartmentRepositoryImpl::new();
        let dept = create_test_department("Operations", None);
        repo.create_batch(vec![dept.clone()]).await?;

        let missing = Uuid::new_v4();
        let existence = repo.exist_by_ids(&[dept.id, missing]).await?;
        assert_eq!(existence, vec![(dept.id, true), (missing, false)]);
        Ok(())
    }
}
