use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::Config;
use crate::error::DashboardError;
use crate::stats::StatusFilter;
use crate::ui::View;

/// Terminal dashboard for project progress and time tracking
#[derive(Debug, Parser)]
#[command(name = "project-dashboard", version, about)]
pub struct Cli {
    /// View to open: dashboard, projects, time-tracking, analytics or settings
    #[arg(long)]
    pub view: Option<View>,

    /// Project filter: all, on-track, at-risk or delayed
    #[arg(long)]
    pub filter: Option<StatusFilter>,

    /// Start with the sidebar collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Reference date for the "Today" total (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Print a Markdown report instead of opening the dashboard
    #[arg(long)]
    pub summary: bool,

    /// Write the report to this file (with --summary)
    #[arg(long, requires = "summary")]
    pub output: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate, DashboardError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DashboardError::InvalidDate(s.to_string()))
}

impl Cli {
    /// Overlay command line flags on the loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(view) = self.view {
            config.view = view;
        }
        if let Some(filter) = self.filter {
            config.filter = filter;
        }
        if let Some(today) = self.today {
            config.today = today;
        }
        config.sidebar_collapsed |= self.collapsed;
        config
    }
}
