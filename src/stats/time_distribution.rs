use std::collections::{HashMap, HashSet};

use super::{chart_label, round_tenths};
use crate::models::{Project, TimeEntry};

/// Logged versus estimated hours for one project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTime {
    pub project: String,
    pub label: String,
    pub logged_hours: f64,
    pub estimated_hours: f64,
    pub remaining_hours: f64,
}

/// Total the logged minutes per project, one row per project in project
/// order.
///
/// Entries are matched to projects by exact name. An entry whose project
/// name matches nothing contributes nothing; see [`unmatched_entries`].
pub fn time_distribution(entries: &[TimeEntry], projects: &[Project]) -> Vec<ProjectTime> {
    let mut minutes: HashMap<&str, u64> = HashMap::new();
    for entry in entries {
        *minutes.entry(entry.project_name.as_str()).or_default() += u64::from(entry.duration);
    }

    projects
        .iter()
        .map(|project| {
            let logged = minutes.get(project.name.as_str()).copied().unwrap_or(0);
            let logged_hours = round_tenths(logged as f64 / 60.0);
            let estimated_hours = project.estimated_hours.unwrap_or(0.0);

            ProjectTime {
                project: project.name.clone(),
                label: chart_label(&project.name),
                logged_hours,
                estimated_hours,
                remaining_hours: (estimated_hours - logged_hours).max(0.0),
            }
        })
        .collect()
}

/// Entries whose project name does not match any project.
pub fn unmatched_entries<'a>(entries: &'a [TimeEntry], projects: &[Project]) -> Vec<&'a TimeEntry> {
    let names: HashSet<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    entries
        .iter()
        .filter(|e| !names.contains(e.project_name.as_str()))
        .collect()
}
