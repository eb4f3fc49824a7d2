pub mod repo_impl;
pub mod append;
pub mod load_batch;
pub mod find_by_subject;
pub mod test_utils;

pub use repo_impl::ActivityEntryRepositoryImpl;
