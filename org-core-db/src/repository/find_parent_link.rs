use async_trait::async_trait;
use uuid::Uuid;

use crate::models::organization::department::ParentLinkModel;

/// Minimal-projection lookup of a department's parent link.
///
/// Ancestor-chain walks issue one of these per hop, so each call must fetch
/// only `{id, parent_id}` of a single row, never the full entity. This
/// bounds a walk over a chain of depth d to d single-row fetches.
#[async_trait]
pub trait FindParentLink: Send + Sync {
    /// # Returns
    /// * `Ok(Some(link))` - The parent link of the department
    /// * `Ok(None)` - If no department with the given id exists
    /// * `Err` - An error if the query could not be executed
    async fn find_parent_link(&self, id: Uuid) -> Result<Option<ParentLinkModel>, Box<dyn std::error::Error + Send + Sync>>;
}
