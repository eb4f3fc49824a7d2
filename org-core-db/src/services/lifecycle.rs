use std::sync::Arc;

use chrono::Utc;
use org_core_api::{ApiError, ApiResult, ErrorReporter, Principal, TemplateResolver};
use uuid::Uuid;

use crate::models::activity::activity_event::ActivityEvent;
use crate::models::organization::department::DepartmentModel;
use crate::models::tracked::ActivityTracked;
use crate::repository::append_activity::AppendActivity;
use crate::repository::create_batch::CreateBatch;
use crate::repository::delete_batch::DeleteBatch;
use crate::repository::find_ancestry_fields::FindAncestryFields;
use crate::repository::find_named_link::FindNamedLink;
use crate::repository::find_parent_link::FindParentLink;
use crate::repository::load::Load;
use crate::repository::update_batch::UpdateBatch;
use crate::services::activity::ActivityLogger;
use crate::services::hierarchy::HierarchyGuard;

/// Maps a deletion to the event recorded for it.
///
/// Types without soft-delete support record `deleted` before the delete
/// commits; types with support record by where the entity ended up:
/// trashed → `soft_deleted`, gone despite the support → `hard_deleted`.
pub fn deletion_event(supports_soft_delete: bool, trashed: bool) -> ActivityEvent {
    if !supports_soft_delete {
        ActivityEvent::Deleted
    } else if trashed {
        ActivityEvent::SoftDeleted
    } else {
        ActivityEvent::HardDeleted
    }
}

/// Drives department lifecycle transitions through the contracted hook
/// order: guard hooks run before persistence and may abort the mutation;
/// logging hooks run after (or, for hard removal, around) the commit and
/// never abort it. Each transition triggers exactly one log attempt.
pub struct DepartmentService<S, A> {
    departments: Arc<S>,
    guard: HierarchyGuard<S>,
    logger: ActivityLogger<A>,
}

impl<S, A> DepartmentService<S, A>
where
    S: FindParentLink
        + FindAncestryFields
        + FindNamedLink
        + Load<DepartmentModel>
        + CreateBatch<DepartmentModel>
        + UpdateBatch<DepartmentModel>
        + DeleteBatch,
    A: AppendActivity,
{
    pub fn new(
        departments: Arc<S>,
        entries: Arc<A>,
        reporter: Arc<dyn ErrorReporter>,
        templates: Arc<dyn TemplateResolver>,
    ) -> Self {
        Self {
            guard: HierarchyGuard::new(departments.clone()),
            departments,
            logger: ActivityLogger::new(entries, reporter, templates),
        }
    }

    pub fn guard(&self) -> &HierarchyGuard<S> {
        &self.guard
    }

    pub fn logger(&self) -> &ActivityLogger<A> {
        &self.logger
    }

    pub async fn create(
        &self,
        mut department: DepartmentModel,
        principal: &Principal,
    ) -> ApiResult<DepartmentModel> {
        self.before_create(&mut department).await?;
        let department = self.persist_new(department).await?;
        self.after_create(&department, principal).await;
        Ok(department)
    }

    pub async fn update(
        &self,
        mut department: DepartmentModel,
        principal: &Principal,
    ) -> ApiResult<DepartmentModel> {
        let original = self.load_existing(department.id).await?;
        self.before_update(&mut department).await?;
        let department = self.persist_existing(department).await?;
        self.after_update(&department, &original, principal).await;
        Ok(department)
    }

    /// Soft delete: the department moves to the trash and stays loadable.
    pub async fn delete(&self, id: Uuid, principal: &Principal) -> ApiResult<DepartmentModel> {
        let mut department = self.load_existing(id).await?;
        department.deleted_at = Some(Utc::now());
        let department = self.persist_existing(department).await?;
        self.after_delete(&department, principal).await;
        Ok(department)
    }

    /// Permanent removal of the row, despite soft-delete support.
    pub async fn force_delete(&self, id: Uuid, principal: &Principal) -> ApiResult<()> {
        let department = self.load_existing(id).await?;
        self.departments
            .delete_batch(&[id])
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?;
        self.after_delete(&department, principal).await;
        Ok(())
    }

    pub async fn restore(&self, id: Uuid, principal: &Principal) -> ApiResult<DepartmentModel> {
        let mut department = self.load_existing(id).await?;
        department.deleted_at = None;
        let department = self.persist_existing(department).await?;
        self.after_restore(&department, principal).await;
        Ok(department)
    }

    // Hook points, invoked in the order the public operations show.

    async fn before_create(&self, department: &mut DepartmentModel) -> ApiResult<()> {
        self.guard_hierarchy(department, "creation").await
    }

    async fn before_update(&self, department: &mut DepartmentModel) -> ApiResult<()> {
        self.guard_hierarchy(department, "update").await
    }

    async fn after_create(&self, department: &DepartmentModel, principal: &Principal) {
        self.logger
            .log_model_activity(department, None, ActivityEvent::Created, Some(principal))
            .await;
    }

    async fn after_update(
        &self,
        department: &DepartmentModel,
        original: &DepartmentModel,
        principal: &Principal,
    ) {
        self.logger
            .log_model_activity(
                department,
                Some(original),
                ActivityEvent::Updated,
                Some(principal),
            )
            .await;
    }

    async fn after_delete(&self, department: &DepartmentModel, principal: &Principal) {
        let event = deletion_event(
            DepartmentModel::SUPPORTS_SOFT_DELETE,
            department.is_trashed(),
        );
        self.logger
            .log_model_activity(department, None, event, Some(principal))
            .await;
    }

    async fn after_restore(&self, department: &DepartmentModel, principal: &Principal) {
        self.logger
            .log_model_activity(department, None, ActivityEvent::Restored, Some(principal))
            .await;
    }

    /// Structural check and field derivation, in that order. A detected
    /// cycle aborts before any derived field is touched or anything is
    /// persisted.
    async fn guard_hierarchy(
        &self,
        department: &mut DepartmentModel,
        context: &'static str,
    ) -> ApiResult<()> {
        match (
            department.parent_id,
            self.guard.recursion_path(department).await?,
        ) {
            (Some(parent_id), Some(visited)) => {
                tracing::error!(
                    department_id = %department.id,
                    parent_id = %parent_id,
                    context,
                    "circular reference detected"
                );
                Err(ApiError::CircularReference {
                    department_id: department.id,
                    parent_id,
                    visited,
                })
            }
            _ => self.guard.derive_fields(department).await,
        }
    }

    async fn load_existing(&self, id: Uuid) -> ApiResult<DepartmentModel> {
        self.departments
            .load(id)
            .await
            .map_err(|e| ApiError::NotFound(format!("department {id}: {e}")))
    }

    async fn persist_new(&self, department: DepartmentModel) -> ApiResult<DepartmentModel> {
        self.departments
            .create_batch(vec![department])
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::InternalError("create returned no rows".to_string()))
    }

    async fn persist_existing(&self, department: DepartmentModel) -> ApiResult<DepartmentModel> {
        self.departments
            .update_batch(vec![department])
            .await
            .map_err(|e| ApiError::DatabaseError(e.to_string()))?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::InternalError("update returned no rows".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_event_routing() {
        assert_eq!(deletion_event(false, false), ActivityEvent::Deleted);
        // a non-capable type can never be trashed, but the routing must not
        // depend on that
        assert_eq!(deletion_event(false, true), ActivityEvent::Deleted);
        assert_eq!(deletion_event(true, true), ActivityEvent::SoftDeleted);
        assert_eq!(deletion_event(true, false), ActivityEvent::HardDeleted);
    }
}
