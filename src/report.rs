use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::{Project, TimeEntry};
use crate::stats::{
    DashboardSummary, StatusFilter, TimeTotals, filter_projects, format_duration, task_progress,
    team_workload, time_distribution,
};

/// Renders the dashboard's derived numbers as a Markdown document
pub struct ReportGenerator<'a> {
    projects: &'a [Project],
    entries: &'a [TimeEntry],
    today: NaiveDate,
    tracked_days: u32,
    filter: StatusFilter,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(
        projects: &'a [Project],
        entries: &'a [TimeEntry],
        today: NaiveDate,
        tracked_days: u32,
        filter: StatusFilter,
    ) -> Self {
        Self {
            projects,
            entries,
            today,
            tracked_days,
            filter,
        }
    }

    /// Write the report to `path`, creating parent directories as needed
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(path)
            .with_context(|| format!("creating report {}", path.display()))?;
        file.write_all(self.generate_markdown().as_bytes())?;

        tracing::info!(path = %path.display(), "report written");
        Ok(())
    }

    pub fn generate_markdown(&self) -> String {
        let mut content = String::new();

        content.push_str("# Dashboard\n\n");
        self.push_summary(&mut content);
        self.push_task_progress(&mut content);
        self.push_team_workload(&mut content);
        self.push_projects(&mut content);
        self.push_time_tracking(&mut content);

        content
    }

    fn push_summary(&self, content: &mut String) {
        let summary = DashboardSummary::from_projects(self.projects);

        content.push_str("| Metric | Value | |\n");
        content.push_str("|---|---|---|\n");
        content.push_str(&format!("| Total Projects | {} | |\n", summary.total_projects));
        content.push_str(&format!(
            "| Completed Tasks | {}/{} | {}% overall progress |\n",
            summary.completed_tasks, summary.total_tasks, summary.overall_progress
        ));
        content.push_str(&format!(
            "| On Track | {} | {} need attention |\n",
            summary.on_track,
            summary.needs_attention()
        ));
        content.push_str(&format!(
            "| Hours Logged | {}h | This week |\n\n",
            summary.total_hours_logged
        ));
    }

    fn push_task_progress(&self, content: &mut String) {
        content.push_str("## Task Progress\n\n");
        content.push_str("| Project | Completed | Remaining |\n");
        content.push_str("|---|---:|---:|\n");
        for row in task_progress(self.projects) {
            content.push_str(&format!("| {} | {} | {} |\n", row.label, row.completed, row.remaining));
        }
        content.push('\n');
    }

    fn push_team_workload(&self, content: &mut String) {
        content.push_str("## Team Workload\n\n");
        for member in team_workload(self.projects) {
            let noun = if member.projects == 1 { "project" } else { "projects" };
            content.push_str(&format!(
                "- {}: {} {} ({:.0}%)\n",
                member.member,
                member.projects,
                noun,
                member.share * 100.0
            ));
        }
        content.push('\n');
    }

    fn push_projects(&self, content: &mut String) {
        let projects = filter_projects(self.projects, self.filter);

        content.push_str(&format!("## Active Projects ({})\n\n", projects.len()));
        for project in projects {
            content.push_str(&format!("### {} ({})\n", project.name, project.status.label()));
            content.push_str(&format!("{}\n\n", project.description));
            content.push_str(&format!("- Progress: {}%\n", project.progress));
            content.push_str(&format!(
                "- Tasks: {}/{}\n",
                project.tasks_completed, project.total_tasks
            ));
            content.push_str(&format!("- Due: {}\n", project.due_date.format("%b %-d, %Y")));
            content.push_str(&format!("- Team: {} members\n", project.team.len()));
            if let (Some(logged), Some(estimated)) = (project.hours_logged, project.estimated_hours) {
                content.push_str(&format!("- Hours: {}/{}h\n", logged, estimated));
            }
            content.push('\n');
        }
    }

    fn push_time_tracking(&self, content: &mut String) {
        let totals = TimeTotals::from_entries(self.entries, self.today, self.tracked_days);

        content.push_str("## Time Tracking\n\n");
        content.push_str(&format!("- Today: {}\n", format_duration(totals.today_minutes)));
        content.push_str(&format!("- This Week: {}\n", format_duration(totals.week_minutes)));
        content.push_str(&format!(
            "- Avg per Day: {}\n\n",
            format_duration(totals.average_per_day)
        ));

        content.push_str("| Project | Logged | Remaining | Estimated |\n");
        content.push_str("|---|---:|---:|---:|\n");
        for row in time_distribution(self.entries, self.projects) {
            content.push_str(&format!(
                "| {} | {}h | {}h | {}h |\n",
                row.label, row.logged_hours, row.remaining_hours, row.estimated_hours
            ));
        }
        content.push('\n');

        content.push_str("| Task | Project | Date | Duration |\n");
        content.push_str("|---|---|---|---:|\n");
        for entry in self.entries {
            content.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                entry.task_name,
                entry.project_name,
                entry.date.format("%b %-d, %Y"),
                format_duration(u64::from(entry.duration))
            ));
        }
    }
}
