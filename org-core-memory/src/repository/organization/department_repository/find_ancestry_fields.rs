use async_trait::async_trait;
use org_core_db::models::organization::department::AncestryModel;
use org_core_db::repository::find_ancestry_fields::FindAncestryFields;
use uuid::Uuid;

use super::repo_impl::DepartmentRepositoryImpl;

#[async_trait]
impl FindAncestryFields for DepartmentRepositoryImpl {
    async fn find_ancestry_fields(
        &self,
        id: Uuid,
    ) -> Result<Option<AncestryModel>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = self.rows.read();
        Ok(rows.get(&id).map(|d| AncestryModel {
            id: d.id,
            parent_id: d.parent_id,
            parent_path: d.parent_path.clone(),
            top_ancestor_id: d.top_ancestor_id,
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
    async fn test_find_ancestry_fields_projection() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = DepartmentRepositoryImpl::new();
        let mut root = create_test_department("Operations", None);
        root.parent_path = "/".to_string();
        repo.create_batch(vec![root.clone()]).await?;

        let fields = repo.find_ancestry_fields(root.id).await?.unwrap();
        assert_eq!(fields.id, root.id);
        assert_eq!(fields.parent_path, "/");
        assert_eq!(fields.top_ancestor_id, None);
        assert_eq!(fields.name.as_str(), "Operations");
        Ok(())
    }
}
