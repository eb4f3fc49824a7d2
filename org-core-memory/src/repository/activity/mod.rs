pub mod activity_entry_repository;

pub use activity_entry_repository::ActivityEntryRepositoryImpl;
