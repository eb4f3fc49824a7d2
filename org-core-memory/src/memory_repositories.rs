use std::sync::Arc;

use crate::repository::activity::activity_entry_repository::ActivityEntryRepositoryImpl;
use crate::repository::organization::department_repository::DepartmentRepositoryImpl;

/// Container wiring up one in-memory repository per entity.
///
/// All repositories built by one container share nothing with those of
/// another, so each container is an isolated backing store.
pub struct MemoryRepositories {
    pub department_repository: Arc<DepartmentRepositoryImpl>,
    pub activity_entry_repository: Arc<ActivityEntryRepositoryImpl>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self {
            department_repository: Arc::new(DepartmentRepositoryImpl::new()),
            activity_entry_repository: Arc::new(ActivityEntryRepositoryImpl::new()),
        }
    }
}

impl Default for MemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}
