use async_trait::async_trait;
use org_core_db::{
    models::organization::department::DepartmentModel,
    repository::{load::Load, load_batch::LoadBatch},
};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory department store: rows keyed by id behind a read-write lock.
///
/// Every lock scope stays inside a single operation, which gives callers
/// the point-query semantics the hierarchy walks assume: each fetch sees
/// the rows as committed at that instant, and nothing is held across hops.
pub struct DepartmentRepositoryImpl {
    pub(crate) rows: RwLock<HashMap<Uuid, DepartmentModel>>,
}

impl DepartmentRepositoryImpl {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for DepartmentRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Load<DepartmentModel> for DepartmentRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<DepartmentModel, Box<dyn std::error::Error + Send + Sync>> {
        let results = self.load_batch(&[id]).await?;
        results
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| "Entity not found".into())
    }
}

#[async_trait]
impl LoadBatch<DepartmentModel> for DepartmentRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<DepartmentModel>>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = self.rows.read();
        Ok(ids.iter().map(|id| rows.get(id).cloned()).collect())
    }
}
