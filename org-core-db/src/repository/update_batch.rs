use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating multiple entities in a batch
///
/// All updates are performed within a single transaction for atomicity.
/// Updating an entity that does not exist is an error; no rows are
/// partially applied.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait UpdateBatch<T: Identifiable>: Send + Sync {
    /// Update multiple items in a single transaction
    ///
    /// # Arguments
    /// * `items` - A vector of entities to update
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of updated entities
    /// * `Err` - An error if the transaction could not be executed
    async fn update_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
