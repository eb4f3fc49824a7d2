use async_trait::async_trait;
use uuid::Uuid;

use crate::models::organization::department::AncestryModel;

/// Minimal-projection lookup of the fields needed to derive a child's
/// materialized path and composite name from its direct parent:
/// `{id, parent_id, parent_path, top_ancestor_id, name}`.
#[async_trait]
pub trait FindAncestryFields: Send + Sync {
    /// # Returns
    /// * `Ok(Some(fields))` - The ancestry fields of the department
    /// * `Ok(None)` - If no department with the given id exists
    /// * `Err` - An error if the query could not be executed
    async fn find_ancestry_fields(&self, id: Uuid) -> Result<Option<AncestryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
