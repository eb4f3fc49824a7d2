pub mod repo_impl;
pub mod find_by_id;
pub mod find_parent_link;
pub mod find_ancestry_fields;
pub mod find_named_link;
pub mod create_batch;
pub mod update_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod test_utils;

pub use repo_impl::DepartmentRepositoryImpl;
