use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Raised when a create or update would make a department an ancestor
    /// of itself. `visited` holds the ids walked before the repeat was hit.
    #[error("Circular reference detected in department hierarchy")]
    CircularReference {
        department_id: Uuid,
        parent_id: Uuid,
        visited: Vec<Uuid>,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;
