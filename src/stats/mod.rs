//! Derivations over the in-memory project and time entry lists.
//!
//! Everything here is a pure function of its inputs. Views call these on
//! every draw; nothing is cached.

mod summary;
mod task_progress;
mod time_distribution;
mod time_totals;
mod workload;

#[cfg(test)]
mod proptests;

pub use summary::{DashboardSummary, StatusFilter, filter_projects};
pub use task_progress::task_progress;
pub use time_distribution::{time_distribution, unmatched_entries};
pub use time_totals::{TimeTotals, format_duration};
pub use workload::{MemberWorkload, team_workload};

/// Longest project name shown on a chart axis before it is cut short
pub const CHART_LABEL_LEN: usize = 15;

/// Shorten a project name for chart labels.
pub fn chart_label(name: &str) -> String {
    if name.chars().count() > CHART_LABEL_LEN {
        let head: String = name.chars().take(CHART_LABEL_LEN).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// Round to one decimal place, halves away from zero.
pub(crate) fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
