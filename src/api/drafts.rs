//! Draft page callbacks

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::DraftServiceLog;
use crate::services::{FormSession, filter_drafts};

pub fn list_drafts(app: &AppState, search: &str) -> Vec<DraftServiceLog> {
    filter_drafts(&app.draft_repo.list_drafts(), search)
}

pub fn delete_draft(app: &AppState, draft_id: &str) {
    tracing::info!("Deleting draft {}", draft_id);
    app.draft_repo.delete_draft(draft_id);
}

/// "Delete All Drafts", after confirmation
pub fn delete_all_drafts(app: &AppState) {
    let count = app.draft_repo.list_drafts().len();
    app.draft_repo.clear_all_drafts();
    tracing::info!("Deleted all {} drafts", count);
}

/// Open a draft for editing; submitting the session retires the draft
pub fn edit_draft(app: &AppState, draft_id: &str) -> Result<FormSession, DomainError> {
    let draft = app
        .draft_repo
        .find_draft(draft_id)
        .ok_or(DomainError::NotFound)?;
    FormSession::open_from_draft(app, &draft)
}
