pub mod exist_by_ids;
pub mod find_by_id;
pub mod load;
pub mod load_batch;
pub mod create_batch;
pub mod update_batch;
pub mod delete_batch;
pub mod pagination;
pub mod find_parent_link;
pub mod find_ancestry_fields;
pub mod find_named_link;
pub mod append_activity;
pub mod find_activities_by_subject;

// Re-exports
pub use exist_by_ids::*;
pub use find_by_id::*;
pub use load::*;
pub use load_batch::*;
pub use create_batch::*;
pub use update_batch::*;
pub use delete_batch::*;
pub use pagination::*;
pub use find_parent_link::*;
pub use find_ancestry_fields::*;
pub use find_named_link::*;
pub use append_activity::*;
pub use find_activities_by_subject::*;
