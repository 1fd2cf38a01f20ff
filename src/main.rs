mod cli;
mod config;
mod error;
mod logging;
mod models;
mod report;
mod seed;
mod stats;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::cli::Cli;
use crate::config::Config;
use crate::models::{Project, TimeEntry};
use crate::report::ReportGenerator;
use crate::ui::{
    View,
    dashboard::{DashboardState, handle_key as handle_dashboard_key, render_dashboard},
    placeholder::render_placeholder,
    sidebar::{SidebarAction, handle_key as handle_sidebar_key, render_sidebar},
    time_tracking::{TimeTrackingState, handle_key as handle_time_tracking_key, render_time_tracking},
};

// Main application state
struct AppState {
    projects: Vec<Project>,
    time_entries: Vec<TimeEntry>,
    view: View,
    sidebar_collapsed: bool,
    dashboard_state: DashboardState,
    time_tracking_state: TimeTrackingState,
}

impl AppState {
    fn new(config: &Config, projects: Vec<Project>, time_entries: Vec<TimeEntry>) -> Self {
        let dashboard_state = DashboardState::new(config.filter, &projects);
        let time_tracking_state =
            TimeTrackingState::new(config.today, config.tracked_days, &time_entries);

        Self {
            projects,
            time_entries,
            view: config.view,
            sidebar_collapsed: config.sidebar_collapsed,
            dashboard_state,
            time_tracking_state,
        }
    }

    fn switch_view(&mut self, view: View) {
        if self.view != view {
            tracing::info!(from = %self.view, to = %view, "switching view");
        }
        self.view = view;
    }

    /// Apply a key press. Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match handle_sidebar_key(self.view, key) {
            Some(SidebarAction::Quit) => return true,
            Some(SidebarAction::Select(view)) => self.switch_view(view),
            Some(SidebarAction::ToggleCollapse) => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
            }
            None => match self.view {
                View::Dashboard | View::Projects => {
                    handle_dashboard_key(&mut self.dashboard_state, &self.projects, key)
                }
                View::TimeTracking => {
                    handle_time_tracking_key(&mut self.time_tracking_state, &self.time_entries, key)
                }
                View::Analytics | View::Settings => {}
            },
        }

        false
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, command line flags win
    let config = cli.apply(config::init()?);
    logging::init(config.log_file.as_deref())?;

    let projects = seed::projects();
    let time_entries = seed::time_entries();
    for entry in stats::unmatched_entries(&time_entries, &projects) {
        tracing::warn!(
            entry = %entry.id,
            project = %entry.project_name,
            "time entry does not match any project name"
        );
    }

    if cli.summary {
        let generator = ReportGenerator::new(
            &projects,
            &time_entries,
            config.today,
            config.tracked_days,
            config.filter,
        );
        match &cli.output {
            Some(path) => {
                generator.write_to(path)?;
                println!("Report written to {}", path.display());
            }
            None => print!("{}", generator.generate_markdown()),
        }
        return Ok(());
    }

    tracing::info!(view = %config.view, filter = %config.filter, "starting dashboard");

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(&config, projects, time_entries);

    // Run the main app loop
    let result = run_app(&mut terminal, &mut app_state);

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Show any error message
    if let Err(err) = result {
        tracing::error!(error = %err, "dashboard exited with an error");
        println!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app_state: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| render_app(f, app_state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app_state.handle_key(key.code) {
                break;
            }
        }
    }

    Ok(())
}

fn render_app<B: Backend>(frame: &mut Frame<B>, app_state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ui::sidebar::width(app_state.sidebar_collapsed)),
            Constraint::Min(1),
        ].as_ref())
        .split(frame.size());

    render_sidebar(frame, chunks[0], app_state.view, app_state.sidebar_collapsed);

    match app_state.view {
        View::Dashboard | View::Projects => {
            render_dashboard(frame, chunks[1], &app_state.projects, &mut app_state.dashboard_state);
        }
        View::TimeTracking => {
            render_time_tracking(
                frame,
                chunks[1],
                &app_state.projects,
                &app_state.time_entries,
                &mut app_state.time_tracking_state,
            );
        }
        View::Analytics | View::Settings => render_placeholder(frame, chunks[1], app_state.view),
    }
}
