use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Lifecycle transition recorded on an activity entry.
///
/// `Deleted` fires for entity types without soft-delete support;
/// `SoftDeleted` / `HardDeleted` distinguish trash from permanent removal
/// on types that support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_event", rename_all = "snake_case")]
pub enum ActivityEvent {
    Created,
    Updated,
    Deleted,
    SoftDeleted,
    HardDeleted,
    Restored,
}

impl ActivityEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityEvent::Created => "created",
            ActivityEvent::Updated => "updated",
            ActivityEvent::Deleted => "deleted",
            ActivityEvent::SoftDeleted => "soft_deleted",
            ActivityEvent::HardDeleted => "hard_deleted",
            ActivityEvent::Restored => "restored",
        }
    }
}

impl std::fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityEvent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(ActivityEvent::Created),
            "updated" => Ok(ActivityEvent::Updated),
            "deleted" => Ok(ActivityEvent::Deleted),
            "soft_deleted" => Ok(ActivityEvent::SoftDeleted),
            "hard_deleted" => Ok(ActivityEvent::HardDeleted),
            "restored" => Ok(ActivityEvent::Restored),
            _ => Err(()),
        }
    }
}

pub fn serialize_activity_event<S>(value: &ActivityEvent, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_str())
}

pub fn deserialize_activity_event<'de, D>(deserializer: D) -> Result<ActivityEvent, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    ActivityEvent::from_str(&value_str)
        .map_err(|_| serde::de::Error::custom(format!("Unknown activity event: {value_str}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tokens_round_trip() {
        let events = [
            ActivityEvent::Created,
            ActivityEvent::Updated,
            ActivityEvent::Deleted,
            ActivityEvent::SoftDeleted,
            ActivityEvent::HardDeleted,
            ActivityEvent::Restored,
        ];
        for event in events {
            assert_eq!(ActivityEvent::from_str(event.as_str()), Ok(event));
        }
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert!(ActivityEvent::from_str("archived").is_err());
        assert!(ActivityEvent::from_str("").is_err());
    }
}
