//! Weekly overview figures for the home page

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::ServiceLog;
use crate::utils::dates::is_current_week;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeeklyStats {
    /// Rounded mean engine hours of this week's logs
    pub avg_engine_hours: u64,
    /// Spread between the highest and lowest odometer reading
    pub total_miles: u64,
    pub logs_count: usize,
}

impl WeeklyStats {
    pub fn miles_label(&self) -> String {
        if self.total_miles > 999 {
            format!("{:.1}K", self.total_miles as f64 / 1000.0)
        } else {
            self.total_miles.to_string()
        }
    }
}

/// Stats over logs starting in the week containing `today`
pub fn weekly_stats(logs: &[ServiceLog], today: NaiveDate) -> WeeklyStats {
    let weekly: Vec<&ServiceLog> = logs
        .iter()
        .filter(|log| is_current_week(log.start_date, today))
        .collect();

    if weekly.is_empty() {
        return WeeklyStats {
            avg_engine_hours: 0,
            total_miles: 0,
            logs_count: 0,
        };
    }

    let total_hours: f64 = weekly.iter().map(|log| log.engine_hours).sum();
    let avg_engine_hours = (total_hours / weekly.len() as f64).round().max(0.0) as u64;

    let max_odometer = weekly.iter().map(|log| log.odometer).max().unwrap_or(0);
    let min_odometer = weekly.iter().map(|log| log.odometer).min().unwrap_or(0);

    WeeklyStats {
        avg_engine_hours,
        total_miles: max_odometer - min_odometer,
        logs_count: weekly.len(),
    }
}
