use async_trait::async_trait;
use org_core_db::models::organization::department::ParentLinkModel;
use org_core_db::repository::find_parent_link::FindParentLink;
use uuid::Uuid;

use super::repo_impl::DepartmentRepositoryImpl;

#[async_trait]
impl FindParentLink for DepartmentRepositoryImpl {
    async fn find_parent_link(
        &self,
        id: Uuid,
    ) -> Result<Option<ParentLinkModel>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = self.rows.read();
        Ok(rows.get(&id).map(|d| ParentLinkModel {
            id: d.id,
            parent_id: d.parent_id,
        }))
    }
}
