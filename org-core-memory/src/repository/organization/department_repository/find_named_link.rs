use async_trait::async_trait;
use org_core_db::models::organization::department::NamedLinkModel;
use org_core_db::repository::find_named_link::FindNamedLink;
use uuid::Uuid;

use super::repo_impl::DepartmentRepositoryImpl;

#[async_trait]
impl FindNamedLink for DepartmentRepositoryImpl {
    async fn find_named_link(
        &self,
        id: Uuid,
    ) -> Result<Option<NamedLinkModel>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = self.rows.read();
        Ok(rows.get(&id).map(|d| NamedLinkModel {
            id: d.id,
            parent_id: d.parent_id,
            name: d.name.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::organization::department_repository::test_utils::create_test_department;
    use org_core_db::repository::create_batch::CreateBatch;

    #[tokio::test]
    async fn test_find_named_link_projection() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = DepartmentRepositoryImpl::new();
        let root = create_test_department("Operations", None);
        let child = create_test_department("Logistics", Some(root.id));
        repo.create_batch(vec![root.clone(), child.clone()]).await?;

        let link = repo.find_named_link(child.id).await?.unwrap();
        assert_eq!(link.name.as_str(), "Logistics");
        assert_eq!(link.parent_id, Some(root.id));
        Ok(())
    }
}
