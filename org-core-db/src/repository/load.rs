use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading entities by their ID
///
/// This trait provides a standard interface for loading entities from a data store.
/// Any entity that implements the Identifiable trait can be loaded using this trait.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<DepartmentModel> for DepartmentRepositoryImpl {
///     async fn load(&self, id: Uuid) -> Result<DepartmentModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to load
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded entity
    /// * `Err` - An error if the entity could not be loaded
    async fn load(&self, id: Uuid) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
