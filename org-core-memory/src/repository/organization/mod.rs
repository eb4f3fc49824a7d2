pub mod department_repository;

pub use department_repository::DepartmentRepositoryImpl;
