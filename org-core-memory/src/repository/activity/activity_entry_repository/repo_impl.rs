use org_core_db::models::activity::activity_entry::ActivityEntryModel;
use parking_lot::RwLock;

/// In-memory activity entry store.
///
/// Entries live in recording order in an append-only vector; the store
/// exposes no update or delete operation, so a recorded entry is immutable
/// for the lifetime of the store.
pub struct ActivityEntryRepositoryImpl {
    pub(crate) entries: RwLock<Vec<ActivityEntryModel>>,
}

impl ActivityEntryRepositoryImpl {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of every recorded entry, in recording order.
    pub fn entries_snapshot(&self) -> Vec<ActivityEntryModel> {
        self.entries.read().clone()
    }
}

impl Default for ActivityEntryRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}
