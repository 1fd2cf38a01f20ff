use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Running,
    Stopped,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Running => "running",
            EntryStatus::Stopped => "stopped",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(EntryStatus::Running),
            "stopped" => Ok(EntryStatus::Stopped),
            other => Err(DashboardError::UnknownStatus(other.to_string())),
        }
    }
}

/// A block of work logged against a project.
///
/// `project_name` refers to the project by name, not by id.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub id: String,
    pub project_name: String,
    pub task_name: String,
    /// Minutes
    pub duration: u32,
    pub date: NaiveDate,
    pub status: EntryStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_status_round_trips_through_display() {
        for status in [EntryStatus::Running, EntryStatus::Stopped] {
            assert_eq!(status.to_string().parse::<EntryStatus>(), Ok(status));
        }
        assert!("paused".parse::<EntryStatus>().is_err());
    }
}
