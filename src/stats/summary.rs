use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DashboardError;
use crate::models::{Project, ProjectStatus};

/// Which projects the dashboard card list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    OnTrack,
    AtRisk,
    Delayed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::OnTrack,
        StatusFilter::AtRisk,
        StatusFilter::Delayed,
    ];

    pub fn status(&self) -> Option<ProjectStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::OnTrack => Some(ProjectStatus::OnTrack),
            StatusFilter::AtRisk => Some(ProjectStatus::AtRisk),
            StatusFilter::Delayed => Some(ProjectStatus::Delayed),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.status().is_none_or(|status| project.status == status)
    }

    pub fn as_str(&self) -> &'static str {
        self.status().map_or("all", |status| status.as_str())
    }

    pub fn label(&self) -> &'static str {
        self.status().map_or("All Projects", |status| status.label())
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownFilter(s.to_string()))
    }
}

/// Projects matching `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: StatusFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Headline numbers for the dashboard stats cards
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_projects: usize,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    /// Whole percent; 0 when there are no tasks at all
    pub overall_progress: u32,
    pub on_track: usize,
    pub total_hours_logged: f64,
}

impl DashboardSummary {
    pub fn from_projects(projects: &[Project]) -> Self {
        let total_tasks: u64 = projects.iter().map(|p| u64::from(p.total_tasks)).sum();
        let completed_tasks: u64 = projects.iter().map(|p| u64::from(p.tasks_completed)).sum();

        let overall_progress = if total_tasks == 0 {
            0
        } else {
            (completed_tasks as f64 / total_tasks as f64 * 100.0).round() as u32
        };

        let on_track = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::OnTrack)
            .count();

        let total_hours_logged = projects.iter().map(|p| p.hours_logged.unwrap_or(0.0)).sum();

        Self {
            total_projects: projects.len(),
            total_tasks,
            completed_tasks,
            overall_progress,
            on_track,
            total_hours_logged,
        }
    }

    pub fn needs_attention(&self) -> usize {
        self.total_projects - self.on_track
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn summarises_seed_projects() {
        let summary = DashboardSummary::from_projects(&seed::projects());

        assert_eq!(summary.total_projects, 4);
        assert_eq!(summary.total_tasks, 200);
        assert_eq!(summary.completed_tasks, 120);
        assert_eq!(summary.overall_progress, 60);
        assert_eq!(summary.on_track, 2);
        assert_eq!(summary.needs_attention(), 2);
        assert_eq!(summary.total_hours_logged, 292.0);
    }

    #[test]
    fn empty_list_reports_zero_progress() {
        let summary = DashboardSummary::from_projects(&[]);

        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.overall_progress, 0);
        assert_eq!(summary.needs_attention(), 0);
        assert_eq!(summary.total_hours_logged, 0.0);
    }

    #[test]
    fn projects_without_tasks_report_zero_progress() {
        let mut projects = seed::projects();
        for project in &mut projects {
            project.tasks_completed = 0;
            project.total_tasks = 0;
        }

        assert_eq!(DashboardSummary::from_projects(&projects).overall_progress, 0);
    }

    #[test]
    fn progress_is_rounded() {
        let mut projects = seed::projects();
        projects.truncate(1);
        projects[0].tasks_completed = 2;
        projects[0].total_tasks = 3;

        assert_eq!(DashboardSummary::from_projects(&projects).overall_progress, 67);
    }

    #[test]
    fn missing_hours_count_as_zero() {
        let mut projects = seed::projects();
        projects[0].hours_logged = None;

        assert_eq!(DashboardSummary::from_projects(&projects).total_hours_logged, 205.0);
    }

    #[test]
    fn all_filter_keeps_every_project_in_order() {
        let projects = seed::projects();
        let filtered = filter_projects(&projects, StatusFilter::All);

        assert_eq!(ids(&filtered), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn status_filter_preserves_order() {
        let projects = seed::projects();

        assert_eq!(ids(&filter_projects(&projects, StatusFilter::OnTrack)), vec!["1", "3"]);
        assert_eq!(ids(&filter_projects(&projects, StatusFilter::AtRisk)), vec!["2"]);
        assert_eq!(ids(&filter_projects(&projects, StatusFilter::Delayed)), vec!["4"]);
    }

    #[test]
    fn filter_identifiers() {
        assert_eq!("all".parse(), Ok(StatusFilter::All));
        assert_eq!("at-risk".parse(), Ok(StatusFilter::AtRisk));
        assert_eq!(
            "done".parse::<StatusFilter>(),
            Err(DashboardError::UnknownFilter("done".to_string()))
        );
        assert_eq!(StatusFilter::All.label(), "All Projects");
        assert_eq!(StatusFilter::Delayed.label(), "Delayed");
    }
}
