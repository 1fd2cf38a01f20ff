use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use dotenvy::dotenv;
use serde::Deserialize;

use crate::stats::StatusFilter;
use crate::ui::View;

/// Prefix shared by every environment variable the dashboard reads
pub const ENV_PREFIX: &str = "DASHBOARD_";

/// Configuration for the application
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Date the "Today" card totals against
    #[serde(default = "default_today")]
    pub today: NaiveDate,
    /// Number of days the "This Week" total is averaged over
    #[serde(default = "default_tracked_days")]
    pub tracked_days: u32,
    /// View shown at startup
    #[serde(default)]
    pub view: View,
    /// Project filter applied at startup
    #[serde(default)]
    pub filter: StatusFilter,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    /// Where log events are written. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

fn default_today() -> NaiveDate {
    let today = NaiveDate::from_ymd_opt(2025, 12, 3);
    debug_assert!(today.is_some(), "invalid default date");
    today.unwrap_or(NaiveDate::MIN)
}

fn default_tracked_days() -> u32 {
    3
}

impl Config {
    /// Load configuration from `DASHBOARD_*` environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize prefixed environment variables into Config struct
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::prefixed(ENV_PREFIX).from_env::<Config>()?;

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            today: default_today(),
            tracked_days: default_tracked_days(),
            view: View::default(),
            filter: StatusFilter::default(),
            sidebar_collapsed: false,
            log_file: None,
        }
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    Config::load()
}
