use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use crate::models::identifiable::Identifiable;
use crate::models::tracked::ActivityTracked;

/// # Documentation
/// Department is a self-referencing hierarchical entity. The parent relation
/// must form a forest: no department may reach itself by following
/// `parent_id` repeatedly.
///
/// The derived fields (`parent_path`, `top_ancestor_id`, `composite_name`)
/// are recomputed immediately before every create and update, never on
/// delete or restore. `composite_name` reflects ancestor names as of the
/// last mutation; renaming an ancestor later does not cascade.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentModel {
    pub id: Uuid,

    /// References DepartmentModel.id of the direct parent, if any
    pub parent_id: Option<Uuid>,

    pub name: HeaplessString<100>,

    /// Materialized ancestor path: slash-delimited ancestor ids, root
    /// anchored (`/` for roots, e.g. `/2f.../5a.../` otherwise).
    /// Unbounded because hierarchy depth is not capped.
    pub parent_path: String,

    /// Id of the unique ancestor with no parent; None for roots
    pub top_ancestor_id: Option<Uuid>,

    /// Ancestor names joined by ` / ` in root-to-self order
    pub composite_name: String,

    /// References the managing person; opaque to this subsystem
    pub manager_person_id: Option<Uuid>,

    /// References the creating person; opaque to this subsystem
    pub creator_person_id: Option<Uuid>,

    /// Display color tag (e.g. `#7c3aed`)
    pub color: Option<HeaplessString<20>>,

    /// Trash marker; a department is trashed iff this is set
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DepartmentModel {
    /// New unsaved department with derived fields at their root defaults.
    pub fn new(name: HeaplessString<100>, parent_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            parent_id,
            name,
            parent_path: "/".to_string(),
            top_ancestor_id: None,
            composite_name: String::new(),
            manager_person_id: None,
            creator_person_id: None,
            color: None,
            deleted_at: None,
        }
    }
}

impl Identifiable for DepartmentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl ActivityTracked for DepartmentModel {
    const SUPPORTS_SOFT_DELETE: bool = true;

    fn subject_type() -> &'static str {
        "department"
    }

    fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Minimal projection for ancestor-chain walks: one row fetch per hop,
/// nothing but the link itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ParentLinkModel {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
}

/// Minimal projection for derived-field computation on the direct parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AncestryModel {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub parent_path: String,
    pub top_ancestor_id: Option<Uuid>,
    pub name: HeaplessString<100>,
}

impl AncestryModel {
    pub fn parent_link(&self) -> ParentLinkModel {
        ParentLinkModel {
            id: self.id,
            parent_id: self.parent_id,
        }
    }
}

/// Minimal projection for composite-name walks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NamedLinkModel {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: HeaplessString<100>,
}
