use async_trait::async_trait;
use uuid::Uuid;

use crate::models::organization::department::NamedLinkModel;

/// Minimal-projection lookup used by composite-name walks:
/// `{id, parent_id, name}` of a single row per hop.
#[async_trait]
pub trait FindNamedLink: Send + Sync {
    /// # Returns
    /// * `Ok(Some(link))` - The named link of the department
    /// * `Ok(None)` - If no department with the given id exists
    /// * `Err` - An error if the query could not be executed
    async fn find_named_link(&self, id: Uuid) -> Result<Option<NamedLinkModel>, Box<dyn std::error::Error + Send + Sync>>;
}
