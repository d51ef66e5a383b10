use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::form::ServiceLogFormData;

/// Kind of work recorded by a service log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    Maintenance,
    Repair,
    Inspection,
    Other,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Maintenance,
        ServiceType::Repair,
        ServiceType::Inspection,
        ServiceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Maintenance => "maintenance",
            ServiceType::Repair => "repair",
            ServiceType::Inspection => "inspection",
            ServiceType::Other => "other",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid service type: {}", s))
    }
}

/// A committed service log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLog {
    pub id: String,
    pub provider_id: String,
    pub service_order: String,
    pub car_id: String,
    pub odometer: u64,
    pub engine_hours: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub service_description: String,
}

impl ServiceLog {
    /// Form values used when this log is opened for editing
    pub fn to_form_data(&self) -> ServiceLogFormData {
        ServiceLogFormData {
            provider_id: self.provider_id.clone(),
            service_order: self.service_order.clone(),
            car_id: self.car_id.clone(),
            odometer: Some(self.odometer as f64),
            engine_hours: Some(self.engine_hours),
            start_date: self.start_date.to_string(),
            end_date: self.end_date.to_string(),
            service_type: self.service_type,
            service_description: self.service_description.clone(),
        }
    }
}
