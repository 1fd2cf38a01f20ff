use chrono::NaiveDate;

use crate::models::{EntryStatus, Project, ProjectStatus, TimeEntry};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    let parsed = NaiveDate::from_ymd_opt(year, month, day);
    debug_assert!(parsed.is_some(), "invalid seed date {year}-{month}-{day}");
    parsed.unwrap_or(NaiveDate::MIN)
}

fn team(members: &[&str]) -> Vec<String> {
    members.iter().map(|m| m.to_string()).collect()
}

/// Projects shown for the lifetime of a session
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "Website Redesign".to_string(),
            description: "Complete overhaul of company website with modern UI/UX".to_string(),
            progress: 75,
            status: ProjectStatus::OnTrack,
            due_date: date(2025, 12, 15),
            tasks_completed: 45,
            total_tasks: 60,
            team: team(&["Alice", "Bob", "Carol"]),
            estimated_hours: Some(120.0),
            hours_logged: Some(87.0),
        },
        Project {
            id: "2".to_string(),
            name: "Mobile App Development".to_string(),
            description: "Native iOS and Android app for customer engagement".to_string(),
            progress: 45,
            status: ProjectStatus::AtRisk,
            due_date: date(2025, 12, 28),
            tasks_completed: 27,
            total_tasks: 60,
            team: team(&["David", "Emma", "Frank"]),
            estimated_hours: Some(200.0),
            hours_logged: Some(92.0),
        },
        Project {
            id: "3".to_string(),
            name: "Marketing Campaign Q4".to_string(),
            description: "Holiday season marketing initiatives across all channels".to_string(),
            progress: 90,
            status: ProjectStatus::OnTrack,
            due_date: date(2025, 12, 10),
            tasks_completed: 36,
            total_tasks: 40,
            team: team(&["Grace", "Henry"]),
            estimated_hours: Some(80.0),
            hours_logged: Some(68.0),
        },
        Project {
            id: "4".to_string(),
            name: "Backend Infrastructure".to_string(),
            description: "Server migration and optimization for improved performance".to_string(),
            progress: 30,
            status: ProjectStatus::Delayed,
            due_date: date(2025, 12, 20),
            tasks_completed: 12,
            total_tasks: 40,
            team: team(&["Ian", "Julia", "Kevin", "Laura"]),
            estimated_hours: Some(160.0),
            hours_logged: Some(45.0),
        },
    ]
}

pub fn time_entries() -> Vec<TimeEntry> {
    let entry = |id: &str, project: &str, task: &str, duration: u32, day: u32| TimeEntry {
        id: id.to_string(),
        project_name: project.to_string(),
        task_name: task.to_string(),
        duration,
        date: date(2025, 12, day),
        status: EntryStatus::Stopped,
    };

    vec![
        entry("1", "Website Redesign", "Homepage wireframes", 145, 3),
        entry("2", "Mobile App Development", "API integration", 230, 3),
        entry("3", "Website Redesign", "Component development", 180, 2),
        entry("4", "Marketing Campaign Q4", "Social media content", 90, 2),
        entry("5", "Backend Infrastructure", "Database optimization", 195, 1),
    ]
}
