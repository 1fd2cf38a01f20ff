use super::chart_label;
use crate::models::Project;

/// One bar group of the task progress chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskProgress {
    pub label: String,
    pub completed: u32,
    pub remaining: u32,
}

pub fn task_progress(projects: &[Project]) -> Vec<TaskProgress> {
    projects
        .iter()
        .map(|p| TaskProgress {
            label: chart_label(&p.name),
            completed: p.tasks_completed,
            remaining: p.total_tasks.saturating_sub(p.tasks_completed),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn one_row_per_project() {
        let rows = task_progress(&seed::projects());

        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[1],
            TaskProgress {
                label: "Mobile App Deve...".to_string(),
                completed: 27,
                remaining: 33,
            }
        );
        assert_eq!(rows[2].label, "Marketing Campa...");
    }

    #[test]
    fn overcompleted_project_has_nothing_remaining() {
        let mut projects = seed::projects();
        projects[0].tasks_completed = 70;

        assert_eq!(task_progress(&projects)[0].remaining, 0);
    }
}
