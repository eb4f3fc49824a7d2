use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
///
/// All creates are performed within a single transaction for atomicity.
/// Returns saved items with any generated fields populated.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<DepartmentModel> for DepartmentRepositoryImpl {
///     async fn create_batch(&self, items: Vec<DepartmentModel>) -> Result<Vec<DepartmentModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<T: Identifiable>: Send + Sync {
    /// Save multiple items in a single transaction
    ///
    /// # Arguments
    /// * `items` - A vector of entities to create
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of created entities with generated fields populated
    /// * `Err` - An error if the transaction could not be executed
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
