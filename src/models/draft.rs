use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form::ServiceLogFormData;

/// An autosaved, unsubmitted snapshot of a service log form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftServiceLog {
    pub draft_id: String,
    #[serde(flatten)]
    pub data: ServiceLogFormData,
    pub updated_at: DateTime<Utc>,
}

impl DraftServiceLog {
    pub fn new(draft_id: impl Into<String>, data: ServiceLogFormData, updated_at: DateTime<Utc>) -> Self {
        Self {
            draft_id: draft_id.into(),
            data,
            updated_at,
        }
    }
}
