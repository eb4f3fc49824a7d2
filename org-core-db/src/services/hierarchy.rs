use std::sync::Arc;

use org_core_api::{ApiError, ApiResult};
use uuid::Uuid;

use crate::models::organization::department::{DepartmentModel, ParentLinkModel};
use crate::repository::find_ancestry_fields::FindAncestryFields;
use crate::repository::find_named_link::FindNamedLink;
use crate::repository::find_parent_link::FindParentLink;

/// Validates and maintains the department forest around every create and
/// update: detects cycles before anything is persisted and recomputes the
/// derived fields (`parent_path`, `top_ancestor_id`, `composite_name`).
///
/// All traversal goes through minimal-projection point lookups, one
/// single-row fetch per hop. Nothing here runs on delete or restore.
pub struct HierarchyGuard<S> {
    source: Arc<S>,
}

impl<S> HierarchyGuard<S>
where
    S: FindParentLink + FindAncestryFields + FindNamedLink,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Returns false when following parent links from `department` would
    /// revisit an id (self-parent or longer cycle). A dangling parent
    /// reference terminates the walk and is not a cycle.
    pub async fn validate_no_recursion(&self, department: &DepartmentModel) -> ApiResult<bool> {
        Ok(self.recursion_path(department).await?.is_none())
    }

    /// Cycle probe behind [`Self::validate_no_recursion`]: returns the
    /// visited-id path when a repeat is hit, None for acyclic chains.
    pub async fn recursion_path(&self, department: &DepartmentModel) -> ApiResult<Option<Vec<Uuid>>> {
        let Some(parent_id) = department.parent_id else {
            return Ok(None);
        };

        if parent_id == department.id {
            tracing::error!(
                department_id = %department.id,
                parent_id = %parent_id,
                "department parent_id set to self"
            );
            return Ok(Some(vec![department.id]));
        }

        let mut visited: Vec<Uuid> = vec![department.id];
        let mut current_parent_id = Some(parent_id);

        while let Some(ancestor_id) = current_parent_id {
            if visited.contains(&ancestor_id) {
                tracing::error!(
                    department_id = %department.id,
                    parent_id = %parent_id,
                    visited = ?visited,
                    "circular reference detected in parent chain"
                );
                return Ok(Some(visited));
            }
            visited.push(ancestor_id);

            let Some(ancestor) = self
                .source
                .find_parent_link(ancestor_id)
                .await
                .map_err(db_err)?
            else {
                // dangling reference, nothing left to walk
                break;
            };
            current_parent_id = ancestor.parent_id;
        }

        Ok(None)
    }

    /// Recomputes `parent_path`, `top_ancestor_id` and `composite_name` in
    /// place. A parent id pointing at a nonexistent row falls back to the
    /// root defaults without raising.
    pub async fn derive_fields(&self, department: &mut DepartmentModel) -> ApiResult<()> {
        if let Some(parent_id) = department.parent_id {
            match self
                .source
                .find_ancestry_fields(parent_id)
                .await
                .map_err(db_err)?
            {
                Some(parent) => {
                    let base = if parent.parent_path.is_empty() {
                        "/"
                    } else {
                        parent.parent_path.as_str()
                    };
                    department.parent_path = format!("{base}{}/", parent.id);
                    department.top_ancestor_id =
                        self.find_top_ancestor(&parent.parent_link()).await?;
                }
                None => {
                    department.parent_path = "/".to_string();
                    department.top_ancestor_id = None;
                }
            }
        } else {
            department.parent_path = "/".to_string();
            department.top_ancestor_id = None;
        }

        department.composite_name = self.build_composite_name(department).await?;
        Ok(())
    }

    /// Follows parent links from `start` until a node with no parent is
    /// found and returns its id. If an id repeats mid-walk the last valid
    /// node reached is returned instead of looping; a dangling link yields
    /// None.
    pub async fn find_top_ancestor(&self, start: &ParentLinkModel) -> ApiResult<Option<Uuid>> {
        let mut visited: Vec<Uuid> = Vec::new();
        let mut current = Some(start.clone());

        while let Some(node) = &current {
            let Some(parent_id) = node.parent_id else {
                break;
            };
            if visited.contains(&node.id) {
                break;
            }
            visited.push(node.id);
            current = self
                .source
                .find_parent_link(parent_id)
                .await
                .map_err(db_err)?;
        }

        Ok(current.map(|node| node.id))
    }

    /// Walks from `department` to its root, collecting names, and joins
    /// them root-to-leaf with ` / `.
    pub async fn build_composite_name(&self, department: &DepartmentModel) -> ApiResult<String> {
        let mut names: Vec<String> = vec![department.name.as_str().to_string()];
        let mut visited: Vec<Uuid> = vec![department.id];
        let mut next_parent = department.parent_id;

        while let Some(parent_id) = next_parent {
            let Some(node) = self
                .source
                .find_named_link(parent_id)
                .await
                .map_err(db_err)?
            else {
                break;
            };
            if visited.contains(&node.id) {
                break;
            }
            visited.push(node.id);
            names.insert(0, node.name.as_str().to_string());
            next_parent = node.parent_id;
        }

        Ok(names.join(" / "))
    }
}

fn db_err(error: Box<dyn std::error::Error + Send + Sync>) -> ApiError {
    ApiError::DatabaseError(error.to_string())
}
