pub mod components;
pub mod dashboard;
pub mod placeholder;
pub mod sidebar;
pub mod time_tracking;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DashboardError;

/// The screens reachable from the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    Projects,
    TimeTracking,
    Analytics,
    Settings,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Projects,
        View::TimeTracking,
        View::Analytics,
        View::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Projects => "projects",
            View::TimeTracking => "time-tracking",
            View::Analytics => "analytics",
            View::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Projects => "Projects",
            View::TimeTracking => "Time Tracking",
            View::Analytics => "Analytics",
            View::Settings => "Settings",
        }
    }

    fn position(&self) -> usize {
        View::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> View {
        View::ALL[(self.position() + 1) % View::ALL.len()]
    }

    pub fn previous(&self) -> View {
        View::ALL[(self.position() + View::ALL.len() - 1) % View::ALL.len()]
    }

    /// View bound to a number key, `'1'` being the first menu item
    pub fn from_shortcut(c: char) -> Option<View> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| View::ALL.get(i).copied())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.id() == s)
            .ok_or_else(|| DashboardError::UnknownView(s.to_string()))
    }
}
