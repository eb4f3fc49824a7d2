use async_trait::async_trait;
use uuid::Uuid;

use crate::models::activity::activity_entry::ActivityEntryModel;
use crate::repository::pagination::{Page, PageRequest};

/// Paginated read of the activity entries recorded for one subject,
/// oldest first.
///
/// # Example
/// ```ignore
/// let page = repo.find_by_subject(department_id, PageRequest::new(20, 0)).await?;
/// println!("Page {} of {}", page.page_number(), page.total_pages());
/// ```
#[async_trait]
pub trait FindActivitiesBySubject: Send + Sync {
    /// # Arguments
    /// * `subject_id` - The UUID of the entity whose entries should be loaded
    /// * `page` - The pagination parameters (limit and offset)
    ///
    /// # Returns
    /// * `Ok(Page<ActivityEntryModel>)` - A page of entries in recording order
    /// * `Err` - An error if the entries could not be loaded
    async fn find_by_subject(
        &self,
        subject_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<ActivityEntryModel>, Box<dyn std::error::Error + Send + Sync>>;
}
