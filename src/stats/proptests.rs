use chrono::NaiveDate;
use proptest::prelude::*;

use super::*;
use super::workload::MAX_MEMBERS;
use crate::models::{EntryStatus, Project, ProjectStatus, TimeEntry};

fn status() -> impl Strategy<Value = ProjectStatus> {
    prop_oneof![
        Just(ProjectStatus::OnTrack),
        Just(ProjectStatus::AtRisk),
        Just(ProjectStatus::Delayed),
    ]
}

fn project() -> impl Strategy<Value = Project> {
    (
        "[A-D]",
        status(),
        0u32..500,
        0u32..500,
        prop::collection::vec("[A-F]", 0..5),
        prop::option::of(0u32..1000),
        prop::option::of(0u32..1000),
    )
        .prop_map(|(name, status, completed, total, team, estimated, logged)| Project {
            id: String::new(),
            name,
            description: String::new(),
            progress: 0,
            status,
            due_date: NaiveDate::MIN,
            tasks_completed: completed,
            total_tasks: total,
            team,
            estimated_hours: estimated.map(f64::from),
            hours_logged: logged.map(f64::from),
        })
}

fn entry() -> impl Strategy<Value = TimeEntry> {
    ("[A-E]", 0u32..600).prop_map(|(project_name, duration)| TimeEntry {
        id: String::new(),
        project_name,
        task_name: String::new(),
        duration,
        date: NaiveDate::MIN,
        status: EntryStatus::Stopped,
    })
}

fn filter() -> impl Strategy<Value = StatusFilter> {
    prop::sample::select(StatusFilter::ALL.to_vec())
}

proptest! {
    #[test]
    fn task_sums_match_per_project_pairs(projects in prop::collection::vec(project(), 0..12)) {
        let summary = DashboardSummary::from_projects(&projects);

        let completed: u64 = projects.iter().map(|p| u64::from(p.tasks_completed)).sum();
        let total: u64 = projects.iter().map(|p| u64::from(p.total_tasks)).sum();
        prop_assert_eq!(summary.completed_tasks, completed);
        prop_assert_eq!(summary.total_tasks, total);

        let expected = if total == 0 {
            0
        } else {
            (100.0 * completed as f64 / total as f64).round() as u32
        };
        prop_assert_eq!(summary.overall_progress, expected);
    }

    #[test]
    fn filtering_yields_an_ordered_subsequence(
        projects in prop::collection::vec(project(), 0..12),
        filter in filter(),
    ) {
        let filtered = filter_projects(&projects, filter);

        match filter.status() {
            None => {
                prop_assert_eq!(filtered.len(), projects.len());
            }
            Some(status) => {
                prop_assert!(filtered.iter().all(|p| p.status == status));
                let expected = projects.iter().filter(|p| p.status == status).count();
                prop_assert_eq!(filtered.len(), expected);
            }
        }

        let expected: Vec<&Project> = projects.iter().filter(|p| filter.matches(p)).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn workload_is_sorted_and_bounded(projects in prop::collection::vec(project(), 0..12)) {
        let workload = team_workload(&projects);

        prop_assert!(workload.len() <= MAX_MEMBERS);
        prop_assert!(workload.windows(2).all(|w| w[0].projects >= w[1].projects));
        for member in &workload {
            let appearances = projects
                .iter()
                .flat_map(|p| p.team.iter())
                .filter(|m| **m == member.member)
                .count();
            prop_assert_eq!(member.projects, appearances);
        }
    }

    #[test]
    fn time_distribution_has_one_row_per_project(
        entries in prop::collection::vec(entry(), 0..20),
        projects in prop::collection::vec(project(), 0..8),
    ) {
        let rows = time_distribution(&entries, &projects);

        prop_assert_eq!(rows.len(), projects.len());
        for (row, project) in rows.iter().zip(&projects) {
            prop_assert_eq!(&row.project, &project.name);
            prop_assert!(row.logged_hours >= 0.0);
            prop_assert!(row.remaining_hours >= 0.0);
        }
    }

    #[test]
    fn derivations_are_idempotent(
        entries in prop::collection::vec(entry(), 0..20),
        projects in prop::collection::vec(project(), 0..8),
    ) {
        prop_assert_eq!(
            DashboardSummary::from_projects(&projects),
            DashboardSummary::from_projects(&projects)
        );
        prop_assert_eq!(team_workload(&projects), team_workload(&projects));
        prop_assert_eq!(
            time_distribution(&entries, &projects),
            time_distribution(&entries, &projects)
        );
        prop_assert_eq!(task_progress(&projects), task_progress(&projects));
    }
}
