use tui::{
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::ListItem,
};

use super::bar::bar;
use crate::models::{Project, ProjectStatus};

const PROGRESS_WIDTH: usize = 30;

pub fn status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::OnTrack => Color::Green,
        ProjectStatus::AtRisk => Color::Yellow,
        ProjectStatus::Delayed => Color::Red,
    }
}

/// Tasks, due date, team size and hours, as shown under the progress bar
pub fn card_metadata(project: &Project) -> String {
    let mut parts = vec![
        format!("{}/{} tasks", project.tasks_completed, project.total_tasks),
        project.due_date.format("%b %-d, %Y").to_string(),
        format!("{} members", project.team.len()),
    ];
    if let (Some(logged), Some(estimated)) = (project.hours_logged, project.estimated_hours) {
        parts.push(format!("{}/{}h", logged, estimated));
    }
    parts.join(" | ")
}

pub fn project_card(project: &Project) -> ListItem<'static> {
    let color = status_color(project.status);

    let mut progress = vec![Span::raw("Progress ")];
    progress.extend(bar(f64::from(project.progress) / 100.0, PROGRESS_WIDTH, color));
    progress.push(Span::raw(format!(" {}%", project.progress)));

    ListItem::new(vec![
        Spans::from(vec![
            Span::styled(
                project.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", project.status.label()),
                Style::default().fg(color),
            ),
        ]),
        Spans::from(Span::styled(
            project.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Spans::from(progress),
        Spans::from(Span::raw(card_metadata(project))),
        Spans::from(""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn metadata_line() {
        let project = &seed::projects()[0];
        assert_eq!(
            card_metadata(project),
            "45/60 tasks | Dec 15, 2025 | 3 members | 87/120h"
        );
    }

    #[test]
    fn hours_are_omitted_unless_both_are_known() {
        let mut project = seed::projects().remove(3);
        project.estimated_hours = None;
        assert_eq!(
            card_metadata(&project),
            "12/40 tasks | Dec 20, 2025 | 4 members"
        );
    }

    #[test]
    fn card_spans_five_lines() {
        let item = project_card(&seed::projects()[1]);
        assert_eq!(item.height(), 5);
    }
}
