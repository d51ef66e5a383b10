//! Draft recovery: which drafts can be resumed, and which one is newest

use crate::models::DraftServiceLog;
use crate::services::log_service::matches_term;

/// "Pick up where you left off" offer for a fresh create session
#[derive(Debug, Clone, PartialEq)]
pub struct ResumePrompt {
    /// Drafts other than the session's own
    pub draft_count: usize,
    pub latest: DraftServiceLog,
}

impl ResumePrompt {
    pub fn summary(&self) -> String {
        format!(
            "You have {} unsubmitted draft{}",
            self.draft_count,
            if self.draft_count > 1 { "s" } else { "" }
        )
    }
}

/// Every draft except the one owned by the current session
pub fn find_resumable(all: &[DraftServiceLog], current_draft_id: &str) -> Vec<DraftServiceLog> {
    all.iter()
        .filter(|draft| draft.draft_id != current_draft_id)
        .cloned()
        .collect()
}

/// Most recently updated draft; the first one wins on equal timestamps
pub fn latest_of(drafts: &[DraftServiceLog]) -> Option<&DraftServiceLog> {
    drafts.iter().fold(None, |latest, draft| match latest {
        Some(current) if draft.updated_at <= current.updated_at => Some(current),
        _ => Some(draft),
    })
}

/// Build the resume offer, if there is anything to resume
pub fn resume_prompt(all: &[DraftServiceLog], current_draft_id: &str) -> Option<ResumePrompt> {
    let resumable = find_resumable(all, current_draft_id);
    let latest = latest_of(&resumable)?.clone();
    Some(ResumePrompt {
        draft_count: resumable.len(),
        latest,
    })
}

/// Case-insensitive search on draft id, service order, car id and provider id
pub fn filter_drafts(drafts: &[DraftServiceLog], term: &str) -> Vec<DraftServiceLog> {
    drafts
        .iter()
        .filter(|draft| {
            matches_term(
                [
                    draft.draft_id.as_str(),
                    draft.data.service_order.as_str(),
                    draft.data.car_id.as_str(),
                    draft.data.provider_id.as_str(),
                ],
                term,
            )
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceLogFormData;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn draft(draft_id: &str, hour: u32) -> DraftServiceLog {
        let mut data = ServiceLogFormData::starting_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        data.service_order = format!("SO-{}", draft_id.to_uppercase());
        DraftServiceLog::new(draft_id, data, Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap())
    }

    #[test]
    fn test_find_resumable_excludes_current() {
        let all = vec![draft("draft-a", 9), draft("draft-b", 10), draft("draft-c", 8)];

        let resumable = find_resumable(&all, "draft-b");
        let ids: Vec<&str> = resumable.iter().map(|d| d.draft_id.as_str()).collect();

        assert_eq!(ids, vec!["draft-a", "draft-c"]);
    }

    #[test]
    fn test_latest_of_picks_newest() {
        let drafts = vec![draft("draft-a", 10), draft("draft-b", 11)];
        assert_eq!(latest_of(&drafts).unwrap().draft_id, "draft-b");
    }

    #[test]
    fn test_latest_of_keeps_first_on_tie() {
        let drafts = vec![draft("draft-a", 8), draft("draft-b", 11), draft("draft-c", 11)];
        assert_eq!(latest_of(&drafts).unwrap().draft_id, "draft-b");
    }

    #[test]
    fn test_latest_of_empty() {
        assert!(latest_of(&[]).is_none());
    }

    #[test]
    fn test_resume_prompt() {
        let all = vec![draft("draft-a", 8), draft("draft-b", 12), draft("draft-own", 13)];

        let prompt = resume_prompt(&all, "draft-own").unwrap();
        assert_eq!(prompt.draft_count, 2);
        assert_eq!(prompt.latest.draft_id, "draft-b");
        assert_eq!(prompt.summary(), "You have 2 unsubmitted drafts");

        assert!(resume_prompt(&all[2..], "draft-own").is_none());
    }

    #[test]
    fn test_filter_drafts_case_insensitive() {
        let mut other = draft("draft-b", 9);
        other.data.car_id = "CAR-XYZ".to_string();
        let drafts = vec![draft("draft-a", 8), other];

        assert_eq!(filter_drafts(&drafts, "car-x").len(), 1);
        assert_eq!(filter_drafts(&drafts, "so-draft-a")[0].draft_id, "draft-a");
        assert_eq!(filter_drafts(&drafts, "").len(), 2);
        assert!(filter_drafts(&drafts, "nothing").is_empty());
    }
}
