//! In-memory implementation of the log and draft repositories

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{DraftRepository, ServiceLogRepository};
use crate::models::{DraftServiceLog, ServiceLog};

/// Process-lifetime store holding committed logs and drafts.
///
/// Both collections keep insertion order. Writers hold the lock for the whole
/// mutation, so readers never observe a partial update.
#[derive(Default)]
pub struct InMemoryServiceLogStore {
    logs: RwLock<Vec<ServiceLog>>,
    drafts: RwLock<Vec<DraftServiceLog>>,
}

impl InMemoryServiceLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logs(logs: Vec<ServiceLog>) -> Self {
        Self {
            logs: RwLock::new(logs),
            drafts: RwLock::new(Vec::new()),
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl ServiceLogRepository for InMemoryServiceLogStore {
    fn add_log(&self, log: ServiceLog) {
        tracing::debug!("Adding service log {}", log.id);
        write(&self.logs).push(log);
    }

    fn update_log(&self, log: ServiceLog) {
        let mut logs = write(&self.logs);
        match logs.iter_mut().find(|existing| existing.id == log.id) {
            Some(existing) => *existing = log,
            None => tracing::debug!("Ignoring update for unknown service log {}", log.id),
        }
    }

    fn delete_log(&self, id: &str) {
        write(&self.logs).retain(|log| log.id != id);
    }

    fn set_logs(&self, logs: Vec<ServiceLog>) {
        *write(&self.logs) = logs;
    }

    fn list_logs(&self) -> Vec<ServiceLog> {
        read(&self.logs).clone()
    }
}

impl DraftRepository for InMemoryServiceLogStore {
    fn save_draft(&self, draft: DraftServiceLog) {
        let mut drafts = write(&self.drafts);
        match drafts
            .iter_mut()
            .find(|existing| existing.draft_id == draft.draft_id)
        {
            Some(existing) => *existing = draft,
            None => drafts.push(draft),
        }
    }

    fn delete_draft(&self, draft_id: &str) {
        write(&self.drafts).retain(|draft| draft.draft_id != draft_id);
    }

    fn clear_all_drafts(&self) {
        write(&self.drafts).clear();
    }

    fn list_drafts(&self) -> Vec<DraftServiceLog> {
        read(&self.drafts).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ServiceLogFormData, ServiceType};
    use chrono::{NaiveDate, TimeZone, Utc};

    // Helper to build a log with a given id
    fn log(id: &str, odometer: u64) -> ServiceLog {
        ServiceLog {
            id: id.to_string(),
            provider_id: "provider-001".to_string(),
            service_order: "SO-1".to_string(),
            car_id: "car-001".to_string(),
            odometer,
            engine_hours: 10.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            service_type: ServiceType::Repair,
            service_description: "Replaced the alternator".to_string(),
        }
    }

    // Helper to build a draft with a given id and car
    fn draft(draft_id: &str, car_id: &str) -> DraftServiceLog {
        let mut data = ServiceLogFormData::starting_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        data.car_id = car_id.to_string();
        DraftServiceLog::new(draft_id, data, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_add_log_keeps_call_order() {
        let store = InMemoryServiceLogStore::new();
        for id in ["c", "a", "b"] {
            store.add_log(log(id, 1));
        }

        let ids: Vec<String> = store.list_logs().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_update_log_replaces_in_place() {
        let store = InMemoryServiceLogStore::with_logs(vec![log("1", 10), log("2", 20)]);
        store.update_log(log("1", 99));

        let logs = store.list_logs();
        assert_eq!(logs[0].id, "1");
        assert_eq!(logs[0].odometer, 99);
        assert_eq!(logs[1].odometer, 20);
    }

    #[test]
    fn test_update_unknown_log_is_noop() {
        let store = InMemoryServiceLogStore::with_logs(vec![log("1", 10)]);
        let before = store.list_logs();

        store.update_log(log("missing", 5));

        assert_eq!(store.list_logs(), before);
    }

    #[test]
    fn test_delete_log_is_idempotent() {
        let store = InMemoryServiceLogStore::with_logs(vec![log("1", 10), log("2", 20)]);
        store.delete_log("1");
        store.delete_log("1");

        let logs = store.list_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].id, "2");
    }

    #[test]
    fn test_list_logs_is_a_snapshot() {
        let store = InMemoryServiceLogStore::with_logs(vec![log("1", 10)]);
        let snapshot = store.list_logs();

        store.add_log(log("2", 20));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.list_logs().len(), 2);
    }

    #[test]
    fn test_set_logs_replaces_collection() {
        let store = InMemoryServiceLogStore::with_logs(vec![log("1", 10)]);
        store.set_logs(vec![log("7", 70), log("8", 80)]);

        assert!(store.find_log("1").is_none());
        assert_eq!(store.find_log("8").unwrap().odometer, 80);
    }

    #[test]
    fn test_save_draft_upserts_by_id() {
        let store = InMemoryServiceLogStore::new();
        store.save_draft(draft("draft-A", "car-1"));
        store.save_draft(draft("draft-B", "car-2"));
        store.save_draft(draft("draft-A", "car-3"));

        let drafts = store.list_drafts();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].draft_id, "draft-A");
        assert_eq!(drafts[0].data.car_id, "car-3");
        assert_eq!(drafts[1].draft_id, "draft-B");
    }

    #[test]
    fn test_delete_draft_twice_is_noop() {
        let store = InMemoryServiceLogStore::new();
        store.save_draft(draft("draft-A", "car-1"));

        store.delete_draft("draft-A");
        store.delete_draft("draft-A");

        assert!(store.list_drafts().is_empty());
    }

    #[test]
    fn test_clear_all_drafts_leaves_logs() {
        let store = InMemoryServiceLogStore::with_logs(vec![log("1", 10)]);
        store.save_draft(draft("draft-A", "car-1"));
        store.save_draft(draft("draft-B", "car-2"));

        store.clear_all_drafts();

        assert!(store.list_drafts().is_empty());
        assert_eq!(store.list_logs().len(), 1);
    }
}
