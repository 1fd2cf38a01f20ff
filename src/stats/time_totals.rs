use chrono::NaiveDate;

use crate::models::TimeEntry;

/// Minute totals behind the time tracking summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTotals {
    pub today_minutes: u64,
    pub week_minutes: u64,
    pub average_per_day: u64,
}

impl TimeTotals {
    /// `tracked_days` is the number of days the entries span; the week
    /// total is averaged over it.
    pub fn from_entries(entries: &[TimeEntry], today: NaiveDate, tracked_days: u32) -> Self {
        let today_minutes = entries
            .iter()
            .filter(|e| e.date == today)
            .map(|e| u64::from(e.duration))
            .sum();
        let week_minutes: u64 = entries.iter().map(|e| u64::from(e.duration)).sum();

        let average_per_day = if tracked_days == 0 {
            0
        } else {
            (week_minutes as f64 / f64::from(tracked_days)).round() as u64
        };

        Self {
            today_minutes,
            week_minutes,
            average_per_day,
        }
    }
}

/// Format minutes as `"{hours}h {minutes}m"`.
pub fn format_duration(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
