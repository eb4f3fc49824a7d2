use async_trait::async_trait;

use crate::models::activity::activity_entry::ActivityEntryModel;

/// Append-only persistence sink for activity entries.
///
/// This is deliberately the only mutating operation the activity store
/// exposes: entries are immutable once recorded.
#[async_trait]
pub trait AppendActivity: Send + Sync {
    /// Append a single entry
    ///
    /// # Returns
    /// * `Ok(ActivityEntryModel)` - The recorded entry
    /// * `Err` - An error if the entry could not be persisted
    async fn append(
        &self,
        entry: &ActivityEntryModel,
    ) -> Result<ActivityEntryModel, Box<dyn std::error::Error + Send + Sync>>;
}
