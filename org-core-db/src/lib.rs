pub mod models;
pub mod repository;
pub mod services;
pub mod utils;

// Re-exports
pub use models::*;
pub use repository::*;
pub use services::activity::ActivityLogger;
pub use services::hierarchy::HierarchyGuard;
pub use services::lifecycle::{deletion_event, DepartmentService};
