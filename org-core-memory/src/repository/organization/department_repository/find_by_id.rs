use async_trait::async_trait;
use org_core_db::models::organization::department::DepartmentModel;
use org_core_db::repository::find_by_id::FindById;
use uuid::Uuid;

use super::repo_impl::DepartmentRepositoryImpl;

#[async_trait]
impl FindById<DepartmentModel> for DepartmentRepositoryImpl {
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<DepartmentModel>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = self.rows.read();
        Ok(rows.get(&id).cloned())
    }
}
