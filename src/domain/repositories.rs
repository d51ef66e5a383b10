//! Repository trait definitions
//!
//! These traits define the contract for the log and draft collections.
//! Implementations live in the infrastructure layer.
//!
//! Every operation is synchronous and total: updates and deletes aimed at an
//! unknown id are silent no-ops, and list calls return snapshots that do not
//! track later mutations.

use crate::models::{DraftServiceLog, ServiceLog};

/// Repository trait for committed service logs
pub trait ServiceLogRepository: Send + Sync {
    /// Append a log. Id uniqueness is the caller's responsibility.
    fn add_log(&self, log: ServiceLog);

    /// Replace the log with the same id, if any
    fn update_log(&self, log: ServiceLog);

    /// Remove the log with this id, if any
    fn delete_log(&self, id: &str);

    /// Replace the whole collection
    fn set_logs(&self, logs: Vec<ServiceLog>);

    /// All logs in insertion order
    fn list_logs(&self) -> Vec<ServiceLog>;

    /// Find a log by id
    fn find_log(&self, id: &str) -> Option<ServiceLog> {
        self.list_logs().into_iter().find(|log| log.id == id)
    }
}

/// Repository trait for autosaved drafts
pub trait DraftRepository: Send + Sync {
    /// Upsert by `draft_id`: replace in place, or append when new
    fn save_draft(&self, draft: DraftServiceLog);

    /// Remove the draft with this id, if any
    fn delete_draft(&self, draft_id: &str);

    /// Remove every draft
    fn clear_all_drafts(&self);

    /// All drafts in insertion order
    fn list_drafts(&self) -> Vec<DraftServiceLog>;

    /// Find a draft by id
    fn find_draft(&self, draft_id: &str) -> Option<DraftServiceLog> {
        self.list_drafts()
            .into_iter()
            .find(|draft| draft.draft_id == draft_id)
    }
}
