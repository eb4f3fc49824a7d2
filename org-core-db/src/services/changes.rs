use anyhow::bail;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::activity::activity_event::ActivityEvent;

/// Computes the change set recorded for a lifecycle transition.
///
/// `updated` yields changed-field → `{old, new}` pairs against the prior
/// state; every other event yields the full attribute snapshot, which is
/// non-empty by construction for any entity with at least one field.
pub fn determine_changes<T: Serialize>(
    subject: &T,
    original: Option<&T>,
    event: ActivityEvent,
) -> anyhow::Result<Value> {
    match event {
        ActivityEvent::Updated => {
            let current = attributes(subject)?;
            let previous = match original {
                Some(original) => attributes(original)?,
                None => Map::new(),
            };

            let mut changed = Map::new();
            for (field, new_value) in current {
                let old_value = previous.get(&field).cloned().unwrap_or(Value::Null);
                if old_value != new_value {
                    let mut pair = Map::new();
                    pair.insert("old".to_string(), old_value);
                    pair.insert("new".to_string(), new_value);
                    changed.insert(field, Value::Object(pair));
                }
            }
            Ok(Value::Object(changed))
        }
        _ => Ok(Value::Object(attributes(subject)?)),
    }
}

fn attributes<T: Serialize>(value: &T) -> anyhow::Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => bail!("entity did not serialize to an attribute map: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String as HeaplessString;
    use crate::models::organization::department::DepartmentModel;

    fn department(name: &str) -> DepartmentModel {
        DepartmentModel::new(HeaplessString::try_from(name).unwrap(), None)
    }

    #[test]
    fn test_created_snapshots_every_attribute() {
        let dept = department("Operations");
        let changes = determine_changes(&dept, None, ActivityEvent::Created).unwrap();

        let map = changes.as_object().unwrap();
        assert!(!map.is_empty());
        assert_eq!(map["name"], "Operations");
        assert_eq!(map["id"], dept.id.to_string());
    }

    #[test]
    fn test_updated_yields_old_new_pairs_for_changed_fields_only() {
        let original = department("Operations");
        let mut current = original.clone();
        current.name = HeaplessString::try_from("Ops").unwrap();
        current.composite_name = "Ops".to_string();

        let changes =
            determine_changes(&current, Some(&original), ActivityEvent::Updated).unwrap();
        let map = changes.as_object().unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map["name"]["old"], "Operations");
        assert_eq!(map["name"]["new"], "Ops");
        assert_eq!(map["composite_name"]["new"], "Ops");
    }

    #[test]
    fn test_updated_with_identical_state_is_empty() {
        let original = department("Operations");
        let current = original.clone();

        let changes =
            determine_changes(&current, Some(&original), ActivityEvent::Updated).unwrap();
        assert!(changes.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_updated_without_original_marks_all_fields_changed() {
        let current = department("Operations");
        let changes = determine_changes(&current, None, ActivityEvent::Updated).unwrap();

        let map = changes.as_object().unwrap();
        assert_eq!(map["name"]["old"], Value::Null);
        assert_eq!(map["name"]["new"], "Operations");
    }
}
