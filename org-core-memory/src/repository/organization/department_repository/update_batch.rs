use async_trait::async_trait;
use org_core_db::models::organization::department::DepartmentModel;
use org_core_db::repository::update_batch::UpdateBatch;

use super::repo_impl::DepartmentRepositoryImpl;

#[async_trait]
impl UpdateBatch<DepartmentModel> for DepartmentRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<DepartmentModel>,
    ) -> Result<Vec<DepartmentModel>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rows = self.rows.write();

        for item in &items {
            if !rows.contains_key(&item.id) {
                return Err(format!("department {} does not exist", item.id).into());
            }
        }
        for item in &items {
            rows.insert(item.id, item.clone());
        }

        Ok(items)
    }
}
