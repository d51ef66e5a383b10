//! Submission coordinator
//!
//! Turns validated form values into a committed log and retires the draft
//! that produced them. Nothing in the store changes when validation fails.

use crate::domain::{DomainError, DraftRepository, ServiceLogRepository};
use crate::models::{ServiceLog, ServiceLogFormData};
use crate::services::ids::IdGenerator;
use crate::services::validation::build_service_log;

/// Whether a form session creates a new log or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Edit { log_id: String },
}

impl SessionMode {
    pub fn title(&self) -> &'static str {
        match self {
            SessionMode::Create => "Create Service Log",
            SessionMode::Edit { .. } => "Edit Service Log",
        }
    }
}

/// Validate `form` and commit it, then delete `draft_id`.
///
/// Exactly one of `add_log`/`update_log` and one `delete_draft` happen on
/// success.
pub fn submit(
    logs: &dyn ServiceLogRepository,
    drafts: &dyn DraftRepository,
    ids: &IdGenerator,
    form: &ServiceLogFormData,
    mode: &SessionMode,
    draft_id: &str,
) -> Result<ServiceLog, DomainError> {
    let log = match mode {
        SessionMode::Create => {
            let log = build_service_log(form, ids.next_log_id())?;
            logs.add_log(log.clone());
            log
        }
        SessionMode::Edit { log_id } => {
            let log = build_service_log(form, log_id.clone())?;
            logs.update_log(log.clone());
            log
        }
    };

    drafts.delete_draft(draft_id);
    tracing::info!("Committed service log {} from draft {}", log.id, draft_id);
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryServiceLogStore;
    use crate::infrastructure::seed::demo_service_logs;
    use crate::models::{DraftServiceLog, ServiceType};
    use chrono::{NaiveDate, Utc};

    fn valid_form() -> ServiceLogFormData {
        ServiceLogFormData {
            provider_id: "provider-004".to_string(),
            service_order: "SO-2024-004".to_string(),
            car_id: "car-002".to_string(),
            odometer: Some(30000.0),
            engine_hours: Some(900.0),
            start_date: "2024-03-10".to_string(),
            end_date: "2024-03-11".to_string(),
            service_type: ServiceType::Maintenance,
            service_description: "Coolant flush and refill".to_string(),
        }
    }

    fn store_with_draft(draft_id: &str) -> InMemoryServiceLogStore {
        let store = InMemoryServiceLogStore::with_logs(demo_service_logs(
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
        ));
        store.save_draft(DraftServiceLog::new(draft_id, valid_form(), Utc::now()));
        store
    }

    #[test]
    fn test_create_appends_and_retires_draft() {
        let store = store_with_draft("draft-A");
        let ids = IdGenerator::new();

        let log = submit(&store, &store, &ids, &valid_form(), &SessionMode::Create, "draft-A").unwrap();

        assert!(log.id.starts_with("log-"));
        let logs = store.list_logs();
        assert_eq!(logs.len(), 4);
        assert_eq!(logs[3], log);
        assert!(store.list_drafts().is_empty());
    }

    #[test]
    fn test_edit_preserves_id() {
        let store = store_with_draft("draft-B");
        let ids = IdGenerator::new();
        let mode = SessionMode::Edit {
            log_id: "2".to_string(),
        };

        let log = submit(&store, &store, &ids, &valid_form(), &mode, "draft-B").unwrap();

        assert_eq!(log.id, "2");
        let logs = store.list_logs();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[1].service_order, "SO-2024-004");
        assert!(store.find_draft("draft-B").is_none());
    }

    #[test]
    fn test_invalid_form_changes_nothing() {
        let store = store_with_draft("draft-C");
        let ids = IdGenerator::new();
        let mut form = valid_form();
        form.service_description = "short".to_string();

        let before_logs = store.list_logs();
        let result = submit(&store, &store, &ids, &form, &SessionMode::Create, "draft-C");

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(store.list_logs(), before_logs);
        assert_eq!(store.list_drafts().len(), 1);
    }
}
