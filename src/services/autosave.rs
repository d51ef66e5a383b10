//! Draft autosave engine
//!
//! Turns field edits into debounced draft snapshots. Every edit restarts the
//! quiet window; when it elapses without a further edit, the current form
//! values are written to the draft repository under the session's draft id.
//!
//! Status moves `Idle -> Saving -> Saved`, back to `Saving` on the next edit.
//! At most one timer is outstanding per engine: scheduling aborts the
//! previous one, and a generation counter checked under the form lock keeps
//! a timer that already woke up from saving stale data.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::{DomainError, DraftRepository};
use crate::models::{DraftServiceLog, ServiceLogFormData};

/// Draft save status shown next to the form title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// No edits yet
    Idle,
    /// A save is scheduled
    Saving,
    /// Latest edits are persisted
    Saved,
}

/// Form values and identity shared with the pending timer
#[derive(Debug, Clone)]
pub struct FormState {
    pub draft_id: String,
    pub values: ServiceLogFormData,
    /// Values the form was opened (or last reset) with
    pub baseline: ServiceLogFormData,
    pub closed: bool,
}

impl FormState {
    pub fn new(draft_id: String, values: ServiceLogFormData) -> Self {
        Self {
            draft_id,
            baseline: values.clone(),
            values,
            closed: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.baseline
    }

    pub fn snapshot(&self) -> DraftServiceLog {
        DraftServiceLog::new(self.draft_id.clone(), self.values.clone(), Utc::now())
    }
}

pub type SharedFormState = Arc<Mutex<FormState>>;

pub fn lock_form(state: &SharedFormState) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct AutosaveEngine {
    drafts: Arc<dyn DraftRepository>,
    debounce: Duration,
    runtime: Handle,
    status: Arc<watch::Sender<SaveStatus>>,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl AutosaveEngine {
    /// Create an engine bound to the current tokio runtime
    pub fn new(drafts: Arc<dyn DraftRepository>, debounce: Duration) -> Result<Self, DomainError> {
        let runtime = Handle::try_current()
            .map_err(|e| DomainError::Internal(format!("autosave needs a tokio runtime: {}", e)))?;
        let (status, _) = watch::channel(SaveStatus::Idle);

        Ok(Self {
            drafts,
            debounce,
            runtime,
            status: Arc::new(status),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        })
    }

    pub fn status(&self) -> SaveStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.status.subscribe()
    }

    /// Restart the debounce window.
    ///
    /// Must be called while holding the lock on `form`.
    pub fn schedule(&mut self, form: &SharedFormState) {
        let ticket = self.invalidate_pending();
        self.status.send_replace(SaveStatus::Saving);

        let form = Arc::clone(form);
        let drafts = Arc::clone(&self.drafts);
        let status = Arc::clone(&self.status);
        let generation = Arc::clone(&self.generation);
        let debounce = self.debounce;

        tracing::debug!("Autosave scheduled in {:?}", debounce);

        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(debounce).await;

            // std mutex: the guard is never held across an await
            let state = lock_form(&form);
            if state.closed || generation.load(Ordering::SeqCst) != ticket {
                return;
            }
            let draft = state.snapshot();
            tracing::debug!("Autosaving draft {}", draft.draft_id);
            drafts.save_draft(draft);
            status.send_replace(SaveStatus::Saved);
        }));
    }

    /// Persist a pending save right away instead of waiting for the timer.
    ///
    /// Must be called while holding the lock on the form state passed in.
    pub fn flush(&mut self, state: &FormState) {
        if self.status() != SaveStatus::Saving {
            return;
        }
        self.invalidate_pending();
        if state.closed {
            return;
        }
        tracing::debug!("Flushing pending autosave for draft {}", state.draft_id);
        self.drafts.save_draft(state.snapshot());
        self.status.send_replace(SaveStatus::Saved);
    }

    /// Drop any pending save without persisting it
    pub fn cancel(&mut self) {
        self.invalidate_pending();
    }

    fn invalidate_pending(&mut self) -> u64 {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        ticket
    }
}

impl Drop for AutosaveEngine {
    fn drop(&mut self) {
        self.cancel();
    }
}
