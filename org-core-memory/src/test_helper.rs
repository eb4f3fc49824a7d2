//! Test helper module for in-memory test isolation
//!
//! Each [`TestContext`] owns its own backing store, so tests never share
//! state and need no cleanup. The error reporter records what the failure
//! boundary swallowed, letting tests assert on suppressed errors.

use std::sync::Arc;

use org_core_api::{EnglishTemplates, ErrorReporter, Principal};
use org_core_db::services::lifecycle::DepartmentService;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::memory_repositories::MemoryRepositories;
use crate::repository::activity::activity_entry_repository::ActivityEntryRepositoryImpl;
use crate::repository::organization::department_repository::DepartmentRepositoryImpl;

/// Error sink that keeps everything it receives, for assertions.
#[derive(Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: &str, error: &anyhow::Error) {
        self.reports.lock().push(format!("{context}: {error}"));
    }
}

/// Test context bundling an isolated store with a wired department service.
pub struct TestContext {
    pub repos: MemoryRepositories,
    pub service: DepartmentService<DepartmentRepositoryImpl, ActivityEntryRepositoryImpl>,
    pub reporter: Arc<RecordingReporter>,
    pub principal: Principal,
}

impl TestContext {
    pub fn departments(&self) -> &Arc<DepartmentRepositoryImpl> {
        &self.repos.department_repository
    }

    pub fn activities(&self) -> &Arc<ActivityEntryRepositoryImpl> {
        &self.repos.activity_entry_repository
    }
}

/// Setup a test context with a fresh in-memory backing store
///
/// # Example
///
/// ```rust
/// use org_core_memory::test_helper::setup_test_context;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let ctx = setup_test_context();
/// let created = ctx
///     .service
///     .create(
///         org_core_db::models::organization::department::DepartmentModel::new(
///             heapless::String::try_from("Operations").unwrap(),
///             None,
///         ),
///         &ctx.principal,
///     )
///     .await?;
/// assert_eq!(created.parent_path, "/");
/// # Ok(())
/// # }
/// ```
pub fn setup_test_context() -> TestContext {
    let repos = MemoryRepositories::new();
    let reporter = Arc::new(RecordingReporter::default());
    let service = DepartmentService::new(
        repos.department_repository.clone(),
        repos.activity_entry_repository.clone(),
        reporter.clone(),
        Arc::new(EnglishTemplates::new()),
    );

    TestContext {
        repos,
        service,
        reporter,
        principal: Principal::person(Uuid::new_v4()),
    }
}
