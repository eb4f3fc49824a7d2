use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for deleting multiple entities in a batch
///
/// All deletes are performed within a single transaction for atomicity.
/// Returns the number of items successfully deleted.
#[async_trait]
pub trait DeleteBatch: Send + Sync {
    /// Delete multiple items by their IDs in a single transaction
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs of the entities to delete
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items successfully deleted
    /// * `Err` - An error if the transaction could not be executed
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
