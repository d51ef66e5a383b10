//! Form session: one open service log form, its draft identity and autosave
//!
//! A session starts with a draft id (fresh, or inherited from a resumed
//! draft) and keeps it until it is submitted or closed. Field edits go
//! through [`FormSession::set_field`], which applies the start/end date
//! coupling synchronously and hands dirty forms to the autosave engine.
//!
//! The end date written on a start date change is derived: it is part of
//! the same edit and never triggers a save on its own. A form is dirty when
//! its values differ from the values it was opened (or last reset) with.

use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use crate::domain::{DomainError, DraftRepository, ServiceLogRepository};
use crate::infrastructure::AppState;
use crate::models::{DraftServiceLog, FieldChange, FormField, ServiceLog, ServiceLogFormData};
use crate::services::autosave::{lock_form, AutosaveEngine, FormState, SaveStatus, SharedFormState};
use crate::services::draft_resume::{self, ResumePrompt};
use crate::services::ids::IdGenerator;
use crate::services::submission::{self, SessionMode};
use crate::utils::dates::{add_days, parse_iso_date};

pub struct FormSession {
    mode: SessionMode,
    state: SharedFormState,
    autosave: AutosaveEngine,
    log_repo: Arc<dyn ServiceLogRepository>,
    draft_repo: Arc<dyn DraftRepository>,
    ids: Arc<IdGenerator>,
    /// Only fresh create sessions offer to resume other drafts
    offers_resume: bool,
}

impl FormSession {
    /// Blank create-mode form with a new draft id
    pub fn open_create(app: &AppState) -> Result<Self, DomainError> {
        let draft_id = app.ids.next_draft_id();
        Self::open_create_with_draft_id(app, draft_id)
    }

    /// Blank create-mode form under a caller-chosen draft id
    pub fn open_create_with_draft_id(
        app: &AppState,
        draft_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::open(
            app,
            SessionMode::Create,
            draft_id.into(),
            ServiceLogFormData::default(),
            true,
        )
    }

    /// Edit an existing log; the session still autosaves under its own draft id
    pub fn open_edit(app: &AppState, log: &ServiceLog) -> Result<Self, DomainError> {
        let mode = SessionMode::Edit {
            log_id: log.id.clone(),
        };
        let draft_id = app.ids.next_draft_id();
        Self::open(app, mode, draft_id, log.to_form_data(), false)
    }

    /// Continue a saved draft under its own draft id
    pub fn open_from_draft(app: &AppState, draft: &DraftServiceLog) -> Result<Self, DomainError> {
        Self::open(
            app,
            SessionMode::Create,
            draft.draft_id.clone(),
            draft.data.clone(),
            false,
        )
    }

    fn open(
        app: &AppState,
        mode: SessionMode,
        draft_id: String,
        values: ServiceLogFormData,
        offers_resume: bool,
    ) -> Result<Self, DomainError> {
        let autosave = AutosaveEngine::new(app.draft_repo.clone(), app.config().autosave_debounce)?;
        tracing::info!("Opened {:?} form session with draft {}", mode, draft_id);

        Ok(Self {
            mode,
            state: Arc::new(Mutex::new(FormState::new(draft_id, values))),
            autosave,
            log_repo: app.log_repo.clone(),
            draft_repo: app.draft_repo.clone(),
            ids: app.ids.clone(),
            offers_resume,
        })
    }

    pub fn mode(&self) -> &SessionMode {
        &self.mode
    }

    pub fn draft_id(&self) -> String {
        lock_form(&self.state).draft_id.clone()
    }

    pub fn values(&self) -> ServiceLogFormData {
        lock_form(&self.state).values.clone()
    }

    pub fn is_dirty(&self) -> bool {
        lock_form(&self.state).is_dirty()
    }

    pub fn is_closed(&self) -> bool {
        lock_form(&self.state).closed
    }

    pub fn save_status(&self) -> SaveStatus {
        self.autosave.status()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<SaveStatus> {
        self.autosave.subscribe()
    }

    /// Whether the save status indicator should be visible
    pub fn has_started_editing(&self) -> bool {
        self.save_status() != SaveStatus::Idle
    }

    /// Apply one field edit
    pub fn set_field(&mut self, change: FieldChange) {
        let mut state = lock_form(&self.state);
        if state.closed {
            tracing::warn!("Ignoring edit to {} on closed session {}", change.field(), state.draft_id);
            return;
        }

        let start_changed = change.field() == FormField::StartDate;
        state.values.apply(change);

        if start_changed {
            if let Some(start) = parse_iso_date(&state.values.start_date) {
                state.values.end_date = add_days(start, 1).to_string();
            }
        }

        // A pending save is always restarted, even when the edit reverts the form
        if !state.is_dirty() && self.autosave.status() != SaveStatus::Saving {
            return;
        }
        self.autosave.schedule(&self.state);
    }

    /// Apply an edit given as raw text input
    pub fn set_raw(&mut self, field: FormField, raw: &str) -> Result<(), DomainError> {
        let change = FieldChange::parse(field, raw)?;
        self.set_field(change);
        Ok(())
    }

    /// Offer to resume another draft; `None` when there is none to offer
    pub fn resume_prompt(&self) -> Option<ResumePrompt> {
        if !self.offers_resume {
            return None;
        }
        let current = self.draft_id();
        draft_resume::resume_prompt(&self.draft_repo.list_drafts(), &current)
    }

    /// Drafts that could replace this session's values
    pub fn resumable_drafts(&self) -> Vec<DraftServiceLog> {
        draft_resume::find_resumable(&self.draft_repo.list_drafts(), &self.draft_id())
    }

    /// Take over `draft`: its id becomes the session's draft id and its values
    /// replace the form, which is then considered clean.
    ///
    /// A save still pending for the previous draft id is written first.
    pub fn adopt(&mut self, draft: &DraftServiceLog) {
        let mut state = lock_form(&self.state);
        if state.closed {
            tracing::warn!("Ignoring resume of {} on closed session", draft.draft_id);
            return;
        }

        self.autosave.flush(&state);
        tracing::info!("Resuming draft {} (was {})", draft.draft_id, state.draft_id);

        state.draft_id = draft.draft_id.clone();
        state.values = draft.data.clone();
        state.baseline = draft.data.clone();
    }

    /// Adopt the stored draft with this id
    pub fn adopt_by_id(&mut self, draft_id: &str) -> Result<(), DomainError> {
        let draft = self
            .draft_repo
            .find_draft(draft_id)
            .ok_or(DomainError::NotFound)?;
        self.adopt(&draft);
        Ok(())
    }

    /// Adopt the most recently updated other draft, if any
    pub fn adopt_latest(&mut self) -> Option<DraftServiceLog> {
        let latest = self.resume_prompt()?.latest;
        self.adopt(&latest);
        Some(latest)
    }

    /// Delete a draft from the store.
    ///
    /// Deleting the session's own draft does not stop it from autosaving: the
    /// next save writes the row again under the same id.
    pub fn delete_draft(&self, draft_id: &str) {
        self.draft_repo.delete_draft(draft_id);
    }

    /// Validate and commit the form, retiring its draft.
    ///
    /// On validation failure the session stays open and nothing is stored.
    pub fn submit(&mut self) -> Result<ServiceLog, DomainError> {
        let mut state = lock_form(&self.state);
        if state.closed {
            return Err(DomainError::Internal("form session is closed".to_string()));
        }

        let log = submission::submit(
            self.log_repo.as_ref(),
            self.draft_repo.as_ref(),
            &self.ids,
            &state.values,
            &self.mode,
            &state.draft_id,
        )?;

        state.closed = true;
        self.autosave.cancel();
        Ok(log)
    }

    /// Close without submitting; any saved draft stays available
    pub fn cancel(&mut self) {
        tracing::info!("Form session cancelled, draft {} kept", self.draft_id());
        self.close();
    }

    /// End the session and drop any pending autosave
    pub fn close(&mut self) {
        let mut state = lock_form(&self.state);
        state.closed = true;
        self.autosave.cancel();
    }
}

impl Drop for FormSession {
    fn drop(&mut self) {
        self.close();
    }
}
