use async_trait::async_trait;
use org_core_db::models::organization::department::DepartmentModel;
use org_core_db::repository::create_batch::CreateBatch;

use super::repo_impl::DepartmentRepositoryImpl;

#[async_trait]
impl CreateBatch<DepartmentModel> for DepartmentRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<DepartmentModel>,
    ) -> Result<Vec<DepartmentModel>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rows = self.rows.write();

        // all-or-nothing: reject the whole batch before touching the map
        for item in &items {
            if rows.contains_key(&item.id) {
                return Err(format!("department {} already exists", item.id).into());
            }
        }
        for item in &items {
            rows.insert(item.id, item.clone());
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::organization::department_repository::test_utils::create_test_department;
    use org_core_db::repository::load::Load;

    #[tokio::test]
    async fn test_create_batch_persists_rows() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = DepartmentRepositoryImpl::new();
        let dept = create_test_department("Operations", None);

        let created = repo.create_batch(vec![dept.clone()]).await?;
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, dept.id);

        let loaded = repo.load(dept.id).await?;
        assert_eq!(loaded.name.as_str(), "Operations");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_batch_rejects_duplicate_id_atomically() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = DepartmentRepositoryImpl::new();
        let existing = create_test_department("Operations", None);
        repo.create_batch(vec![existing.clone()]).await?;

        let fresh = create_test_department("Sales", None);
        let result = repo.create_batch(vec![fresh.clone(), existing.clone()]).await;
        assert!(result.is_err());
        // the valid item of the failed batch must not have been applied
        assert!(repo.load(fresh.id).await.is_err());
        Ok(())
    }
}
