//! Form validation
//!
//! Checks every field, reporting the first failing rule per field, so the
//! form can show all problems at once.

use crate::domain::{FieldViolation, ValidationError};
use crate::models::{FormField, ServiceLog, ServiceLogFormData};
use crate::utils::dates::parse_iso_date;

pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Largest odometer reading an `f64` form value holds exactly (2^53 - 1)
pub const MAX_ODOMETER: f64 = 9_007_199_254_740_991.0;

/// Validate `form` and build the committed log under `id`
pub fn build_service_log(form: &ServiceLogFormData, id: String) -> Result<ServiceLog, ValidationError> {
    let mut violations = Vec::new();

    let mut required = |field: FormField, value: &str, message: &str| {
        if value.is_empty() {
            violations.push(FieldViolation::new(field, message));
        }
    };
    required(FormField::ProviderId, &form.provider_id, "Provider ID is required");
    required(FormField::ServiceOrder, &form.service_order, "Service Order is required");
    required(FormField::CarId, &form.car_id, "Car ID is required");

    let odometer = match form.odometer {
        None => {
            violations.push(FieldViolation::new(FormField::Odometer, "Odometer must be a number"));
            None
        }
        Some(v) if v <= 0.0 => {
            violations.push(FieldViolation::new(FormField::Odometer, "Odometer must be positive"));
            None
        }
        Some(v) if v.fract() != 0.0 => {
            violations.push(FieldViolation::new(FormField::Odometer, "Odometer must be an integer"));
            None
        }
        Some(v) if v > MAX_ODOMETER => {
            violations.push(FieldViolation::new(FormField::Odometer, "Odometer is too large"));
            None
        }
        Some(v) => Some(v as u64),
    };

    let engine_hours = match form.engine_hours {
        None => {
            violations.push(FieldViolation::new(
                FormField::EngineHours,
                "Engine hours must be a number",
            ));
            None
        }
        Some(v) if v <= 0.0 => {
            violations.push(FieldViolation::new(
                FormField::EngineHours,
                "Engine hours must be positive",
            ));
            None
        }
        Some(v) => Some(v),
    };

    let start_date = check_date(&mut violations, FormField::StartDate, &form.start_date, "Start date");
    let mut end_date = check_date(&mut violations, FormField::EndDate, &form.end_date, "End date");

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            violations.push(FieldViolation::new(
                FormField::EndDate,
                "End date must be after start date",
            ));
            end_date = None;
        }
    }

    let description = form.service_description.as_str();
    if description.is_empty() {
        violations.push(FieldViolation::new(
            FormField::ServiceDescription,
            "Service description is required",
        ));
    } else if description.chars().count() < MIN_DESCRIPTION_CHARS {
        violations.push(FieldViolation::new(
            FormField::ServiceDescription,
            "Description must be at least 10 characters",
        ));
    }

    match (odometer, engine_hours, start_date, end_date) {
        (Some(odometer), Some(engine_hours), Some(start_date), Some(end_date)) if violations.is_empty() => {
            Ok(ServiceLog {
                id,
                provider_id: form.provider_id.clone(),
                service_order: form.service_order.clone(),
                car_id: form.car_id.clone(),
                odometer,
                engine_hours,
                start_date,
                end_date,
                service_type: form.service_type,
                service_description: form.service_description.clone(),
            })
        }
        _ => Err(ValidationError::new(violations)),
    }
}

/// Validate without building a log
pub fn validate(form: &ServiceLogFormData) -> Result<(), ValidationError> {
    build_service_log(form, String::new()).map(|_| ())
}

fn check_date(
    violations: &mut Vec<FieldViolation>,
    field: FormField,
    value: &str,
    label: &str,
) -> Option<chrono::NaiveDate> {
    if value.trim().is_empty() {
        violations.push(FieldViolation::new(field, format!("{} is required", label)));
        return None;
    }
    let parsed = parse_iso_date(value);
    if parsed.is_none() {
        violations.push(FieldViolation::new(
            field,
            format!("{} must be a valid date", label),
        ));
    }
    parsed
}
