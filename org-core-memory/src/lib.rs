pub mod memory_repositories;
pub mod repository;
pub mod test_helper;

pub use memory_repositories::MemoryRepositories;
pub use repository::activity::activity_entry_repository::ActivityEntryRepositoryImpl;
pub use repository::organization::department_repository::DepartmentRepositoryImpl;
