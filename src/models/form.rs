use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::service_log::ServiceType;
use crate::domain::{DomainError, FieldViolation, ValidationError};

/// Field values of a service log form, as entered by the operator.
///
/// Values are kept loosely typed so an in-progress form (and its drafts) can
/// hold input that does not validate yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLogFormData {
    pub provider_id: String,
    pub service_order: String,
    pub car_id: String,
    /// `None` when the field is empty or not a number
    pub odometer: Option<f64>,
    pub engine_hours: Option<f64>,
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub service_description: String,
}

impl ServiceLogFormData {
    /// Blank create-mode values starting on `today`
    pub fn starting_on(today: NaiveDate) -> Self {
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        Self {
            provider_id: String::new(),
            service_order: String::new(),
            car_id: String::new(),
            odometer: Some(0.0),
            engine_hours: Some(0.0),
            start_date: today.to_string(),
            end_date: tomorrow.to_string(),
            service_type: ServiceType::Maintenance,
            service_description: String::new(),
        }
    }

    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::ProviderId(v) => self.provider_id = v,
            FieldChange::ServiceOrder(v) => self.service_order = v,
            FieldChange::CarId(v) => self.car_id = v,
            FieldChange::Odometer(v) => self.odometer = v,
            FieldChange::EngineHours(v) => self.engine_hours = v,
            FieldChange::StartDate(v) => self.start_date = v,
            FieldChange::EndDate(v) => self.end_date = v,
            FieldChange::ServiceType(v) => self.service_type = v,
            FieldChange::ServiceDescription(v) => self.service_description = v,
        }
    }
}

impl Default for ServiceLogFormData {
    fn default() -> Self {
        Self::starting_on(Local::now().date_naive())
    }
}

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    ProviderId,
    ServiceOrder,
    CarId,
    Odometer,
    EngineHours,
    StartDate,
    EndDate,
    #[serde(rename = "type")]
    ServiceType,
    ServiceDescription,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::ProviderId => "providerId",
            FormField::ServiceOrder => "serviceOrder",
            FormField::CarId => "carId",
            FormField::Odometer => "odometer",
            FormField::EngineHours => "engineHours",
            FormField::StartDate => "startDate",
            FormField::EndDate => "endDate",
            FormField::ServiceType => "type",
            FormField::ServiceDescription => "serviceDescription",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field edit coming from the form
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    ProviderId(String),
    ServiceOrder(String),
    CarId(String),
    Odometer(Option<f64>),
    EngineHours(Option<f64>),
    StartDate(String),
    EndDate(String),
    ServiceType(ServiceType),
    ServiceDescription(String),
}

impl FieldChange {
    /// Build a change from raw text input.
    ///
    /// Numbers that do not parse are kept as empty so validation can report
    /// them; an unknown service type is rejected outright.
    pub fn parse(field: FormField, raw: &str) -> Result<Self, DomainError> {
        let change = match field {
            FormField::ProviderId => FieldChange::ProviderId(raw.to_string()),
            FormField::ServiceOrder => FieldChange::ServiceOrder(raw.to_string()),
            FormField::CarId => FieldChange::CarId(raw.to_string()),
            FormField::Odometer => FieldChange::Odometer(parse_number(raw)),
            FormField::EngineHours => FieldChange::EngineHours(parse_number(raw)),
            FormField::StartDate => FieldChange::StartDate(raw.to_string()),
            FormField::EndDate => FieldChange::EndDate(raw.to_string()),
            FormField::ServiceType => {
                let service_type = raw.parse::<ServiceType>().map_err(|_| {
                    DomainError::Validation(ValidationError::single(FieldViolation::new(
                        FormField::ServiceType,
                        "Invalid service type",
                    )))
                })?;
                FieldChange::ServiceType(service_type)
            }
            FormField::ServiceDescription => FieldChange::ServiceDescription(raw.to_string()),
        };
        Ok(change)
    }

    pub fn field(&self) -> FormField {
        match self {
            FieldChange::ProviderId(_) => FormField::ProviderId,
            FieldChange::ServiceOrder(_) => FormField::ServiceOrder,
            FieldChange::CarId(_) => FormField::CarId,
            FieldChange::Odometer(_) => FormField::Odometer,
            FieldChange::EngineHours(_) => FormField::EngineHours,
            FieldChange::StartDate(_) => FormField::StartDate,
            FieldChange::EndDate(_) => FormField::EndDate,
            FieldChange::ServiceType(_) => FormField::ServiceType,
            FieldChange::ServiceDescription(_) => FormField::ServiceDescription,
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_ends_the_day_after_it_starts() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let form = ServiceLogFormData::starting_on(today);

        assert_eq!(form.start_date, "2024-02-28");
        assert_eq!(form.end_date, "2024-02-29");
        assert_eq!(form.odometer, Some(0.0));
        assert_eq!(form.service_type, ServiceType::Maintenance);
    }

    #[test]
    fn test_parse_keeps_bad_numbers_as_empty() {
        let change = FieldChange::parse(FormField::Odometer, "12a").unwrap();
        assert_eq!(change, FieldChange::Odometer(None));

        let change = FieldChange::parse(FormField::EngineHours, " 12.5 ").unwrap();
        assert_eq!(change, FieldChange::EngineHours(Some(12.5)));
    }

    #[test]
    fn test_parse_rejects_unknown_service_type() {
        let err = FieldChange::parse(FormField::ServiceType, "tuning").unwrap_err();
        match err {
            DomainError::Validation(v) => {
                assert_eq!(v.violations()[0].field, FormField::ServiceType);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
