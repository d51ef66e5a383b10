use chrono::NaiveDate;
use std::path::Path;

use crate::domain::{DomainError, ServiceLogRepository};
use crate::infrastructure::config::Config;
use crate::models::{ServiceLog, ServiceType};
use crate::utils::dates::{add_days, start_of_week};

/// Demo logs spread over the week containing `today`
pub fn demo_service_logs(today: NaiveDate) -> Vec<ServiceLog> {
    let week_start = start_of_week(today);

    let entries = [
        (
            "1",
            "provider-001",
            "SO-2024-001",
            45000,
            1250.0,
            3,
            ServiceType::Maintenance,
            "Oil change and filter replacement",
        ),
        (
            "2",
            "provider-002",
            "SO-2024-002",
            45850,
            1275.0,
            2,
            ServiceType::Repair,
            "Brake pad replacement - front axle",
        ),
        (
            "3",
            "provider-003",
            "SO-2024-003",
            46200,
            1285.0,
            5,
            ServiceType::Inspection,
            "Annual state safety inspection",
        ),
    ];

    entries
        .into_iter()
        .map(
            |(id, provider, order, odometer, engine_hours, offset, service_type, description)| {
                let start_date = add_days(week_start, offset);
                ServiceLog {
                    id: id.to_owned(),
                    provider_id: provider.to_owned(),
                    service_order: order.to_owned(),
                    car_id: "car-001".to_owned(),
                    odometer,
                    engine_hours,
                    start_date,
                    end_date: add_days(start_date, 1),
                    service_type,
                    service_description: description.to_owned(),
                }
            },
        )
        .collect()
}

/// Read a JSON array of service logs
pub fn load_seed_file(path: &Path) -> Result<Vec<ServiceLog>, DomainError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Seed(format!("{}: {}", path.display(), e)))?;
    let logs: Vec<ServiceLog> = serde_json::from_str(&raw)?;
    Ok(logs)
}

/// Populate the log collection according to `config`.
///
/// Returns the number of logs seeded.
pub fn seed_service_logs(
    repo: &dyn ServiceLogRepository,
    config: &Config,
    today: NaiveDate,
) -> Result<usize, DomainError> {
    if !config.seed_demo {
        tracing::info!("Seeding disabled via SEED_DEMO");
        return Ok(0);
    }

    let logs = match &config.seed_file {
        Some(path) => {
            tracing::info!("Seeding service logs from {}", path.display());
            load_seed_file(path)?
        }
        None => demo_service_logs(today),
    };

    let count = logs.len();
    repo.set_logs(logs);
    tracing::info!("Seeded {} service logs", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryServiceLogStore;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_demo_logs_fall_in_current_week() {
        // Wednesday
        let logs = demo_service_logs(date(2024, 3, 6));

        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].start_date, date(2024, 3, 7));
        assert_eq!(logs[0].end_date, date(2024, 3, 8));
        assert_eq!(logs[1].start_date, date(2024, 3, 6));
        assert_eq!(logs[2].start_date, date(2024, 3, 9));
        assert_eq!(logs[2].service_type, ServiceType::Inspection);
    }

    #[test]
    fn test_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let logs = demo_service_logs(date(2024, 3, 6));
        write!(file, "{}", serde_json::to_string(&logs[..1]).unwrap()).unwrap();

        let config = Config {
            seed_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let store = InMemoryServiceLogStore::new();

        let count = seed_service_logs(&store, &config, date(2024, 3, 6)).unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.list_logs()[0].service_order, "SO-2024-001");
    }

    #[test]
    fn test_malformed_seed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, DomainError::Seed(_)));
    }

    #[test]
    fn test_seeding_can_be_disabled() {
        let config = Config {
            seed_demo: false,
            ..Config::default()
        };
        let store = InMemoryServiceLogStore::new();

        assert_eq!(seed_service_logs(&store, &config, date(2024, 3, 6)).unwrap(), 0);
        assert!(store.list_logs().is_empty());
    }
}
