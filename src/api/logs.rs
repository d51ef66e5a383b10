//! Home page callbacks: service log table, weekly overview, log dialogs

use chrono::NaiveDate;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::ServiceLog;
use crate::services::{FormSession, WeeklyStats, filter_logs, weekly_stats};

/// Logs shown in the table, filtered by the search box
pub fn list_logs(app: &AppState, search: &str) -> Vec<ServiceLog> {
    filter_logs(&app.log_repo.list_logs(), search)
}

pub fn weekly_overview(app: &AppState, today: NaiveDate) -> WeeklyStats {
    weekly_stats(&app.log_repo.list_logs(), today)
}

/// "Create Service Log" button
pub fn create_log_session(app: &AppState) -> Result<FormSession, DomainError> {
    FormSession::open_create(app)
}

/// "Edit" on a table row
pub fn edit_log_session(app: &AppState, log_id: &str) -> Result<FormSession, DomainError> {
    let log = app.log_repo.find_log(log_id).ok_or(DomainError::NotFound)?;
    FormSession::open_edit(app, &log)
}

/// Confirmed delete on a table row
pub fn delete_log(app: &AppState, log_id: &str) {
    tracing::info!("Deleting service log {}", log_id);
    app.log_repo.delete_log(log_id);
}

pub fn replace_logs(app: &AppState, logs: Vec<ServiceLog>) {
    app.log_repo.set_logs(logs);
}
