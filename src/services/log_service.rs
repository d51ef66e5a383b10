//! Log browsing helpers

use crate::models::ServiceLog;

/// Case-insensitive substring match of `term` against any of `fields`.
/// An empty term matches everything.
pub fn matches_term<'a>(fields: impl IntoIterator<Item = &'a str>, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Search logs by id, service order, car id and provider id
pub fn filter_logs(logs: &[ServiceLog], term: &str) -> Vec<ServiceLog> {
    logs.iter()
        .filter(|log| {
            matches_term(
                [
                    log.id.as_str(),
                    log.service_order.as_str(),
                    log.car_id.as_str(),
                    log.provider_id.as_str(),
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
    use crate::infrastructure::seed::demo_service_logs;
    use chrono::NaiveDate;

    #[test]
    fn test_filter_logs() {
        let logs = demo_service_logs(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());

        assert_eq!(filter_logs(&logs, "so-2024-002")[0].id, "2");
        assert_eq!(filter_logs(&logs, "PROVIDER-00").len(), 3);
        assert_eq!(filter_logs(&logs, "CAR-001").len(), 3);
        assert!(filter_logs(&logs, "car-002").is_empty());
        assert_eq!(filter_logs(&logs, "  ").len(), 3);
    }
}
