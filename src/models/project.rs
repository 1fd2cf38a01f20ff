use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    OnTrack,
    AtRisk,
    Delayed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::OnTrack,
        ProjectStatus::AtRisk,
        ProjectStatus::Delayed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::OnTrack => "on-track",
            ProjectStatus::AtRisk => "at-risk",
            ProjectStatus::Delayed => "delayed",
        }
    }

    /// Human readable label used on cards and filter buttons
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::OnTrack => "On Track",
            ProjectStatus::AtRisk => "At Risk",
            ProjectStatus::Delayed => "Delayed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Percent complete as reported by the project owner. Not derived from
    /// the task counts.
    pub progress: u8,
    pub status: ProjectStatus,
    pub due_date: NaiveDate,
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub team: Vec<String>,
    pub estimated_hours: Option<f64>,
    pub hours_logged: Option<f64>,
}
