use chrono::NaiveDate;
use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Project, TimeEntry};
use crate::stats::{TimeTotals, format_duration, time_distribution};
use crate::ui::components::{
    bar::stacked_bar,
    stats_card::{StatsCard, render_stats_card},
};

const LABEL_WIDTH: usize = 20;

/// Which entry, if any, is flagged as actively timed.
///
/// Purely a display flag: nothing measures elapsed time and the entry's
/// own status is left alone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimerState {
    active: Option<String>,
}

impl TimerState {
    pub fn toggle(&mut self, entry_id: &str) {
        if self.active.as_deref() == Some(entry_id) {
            self.active = None;
        } else {
            self.active = Some(entry_id.to_string());
        }
        tracing::debug!(active = ?self.active, "timer toggled");
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, entry_id: &str) -> bool {
        self.active() == Some(entry_id)
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.active.is_some())
    }
}

// Represents the state of the time tracking screen
pub struct TimeTrackingState {
    today: NaiveDate,
    tracked_days: u32,
    table_state: TableState,
    timer: TimerState,
}

impl TimeTrackingState {
    pub fn new(today: NaiveDate, tracked_days: u32, entries: &[TimeEntry]) -> Self {
        let mut table_state = TableState::default();
        if !entries.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            today,
            tracked_days,
            table_state,
            timer: TimerState::default(),
        }
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_entry<'a>(&self, entries: &'a [TimeEntry]) -> Option<&'a TimeEntry> {
        self.table_state.selected().and_then(|i| entries.get(i))
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }
}

pub fn render_time_tracking<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    projects: &[Project],
    entries: &[TimeEntry],
    state: &mut TimeTrackingState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(projects.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ].as_ref())
        .split(area);

    render_totals(frame, chunks[0], entries, state);
    render_time_chart(frame, chunks[1], projects, entries);
    render_quick_timer(frame, chunks[2], projects);
    render_entries(frame, chunks[3], entries, state);

    let help = Paragraph::new("<Up/Down> Select Entry | <Enter/Space> Toggle Timer | <1-5/Tab> Switch View | <[> Sidebar | <Q> Quit")
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));
    frame.render_widget(help, chunks[4]);
}

fn render_totals<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    entries: &[TimeEntry],
    state: &TimeTrackingState,
) {
    let totals = TimeTotals::from_entries(entries, state.today, state.tracked_days);

    let cards = [
        StatsCard {
            title: "Today",
            value: format_duration(totals.today_minutes),
            subtitle: None,
            color: Color::Blue,
        },
        StatsCard {
            title: "This Week",
            value: format_duration(totals.week_minutes),
            subtitle: None,
            color: Color::Green,
        },
        StatsCard {
            title: "Active Tasks",
            value: state.timer().active_count().to_string(),
            subtitle: None,
            color: Color::Magenta,
        },
        StatsCard {
            title: "Avg per Day",
            value: format_duration(totals.average_per_day),
            subtitle: None,
            color: Color::LightRed,
        },
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4].as_ref())
        .split(area);

    for (card, column) in cards.iter().zip(columns) {
        render_stats_card(frame, column, card);
    }
}

fn render_time_chart<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    projects: &[Project],
    entries: &[TimeEntry],
) {
    let rows = time_distribution(entries, projects);
    let max = rows
        .iter()
        .map(|r| (r.logged_hours + r.remaining_hours).max(r.estimated_hours))
        .fold(0.0, f64::max);
    let width = (area.width as usize).saturating_sub(LABEL_WIDTH + 20);

    let lines: Vec<Spans> = rows
        .iter()
        .map(|row| {
            let mut spans = vec![Span::raw(format!("{:<w$}", row.label, w = LABEL_WIDTH))];
            spans.extend(stacked_bar(
                row.logged_hours,
                row.remaining_hours,
                max,
                width,
                (Color::Blue, Color::Gray),
            ));
            spans.push(Span::raw(format!(
                " {}h / {}h",
                row.logged_hours, row.estimated_hours
            )));
            Spans::from(spans)
        })
        .collect();

    let chart = Paragraph::new(lines).block(
        Block::default()
            .title("Time Distribution by Project (logged / remaining)")
            .borders(Borders::ALL),
    );
    frame.render_widget(chart, area);
}

fn render_quick_timer<B: Backend>(frame: &mut Frame<B>, area: Rect, projects: &[Project]) {
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    let line = Spans::from(vec![
        Span::styled("Projects: ", Style::default().fg(Color::Gray)),
        Span::raw(names.join(", ")),
        Span::raw("  "),
        Span::styled(
            "[Start Timer]",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ),
    ]);

    let timer = Paragraph::new(line).block(Block::default().title("Quick Timer").borders(Borders::ALL));
    frame.render_widget(timer, area);
}

fn render_entries<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    entries: &[TimeEntry],
    state: &mut TimeTrackingState,
) {
    let header_cells = ["Task", "Project", "Date", "Duration", "Timer"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells)
        .style(Style::default())
        .height(1)
        .bottom_margin(1);

    let rows = entries.iter().map(|entry| {
        let timer = if state.timer.is_active(&entry.id) {
            Cell::from("|| running").style(Style::default().fg(Color::LightRed))
        } else {
            Cell::from("> start").style(Style::default().fg(Color::Blue))
        };

        let cells = vec![
            Cell::from(entry.task_name.clone()),
            Cell::from(entry.project_name.clone()),
            Cell::from(entry.date.format("%b %-d, %Y").to_string()),
            Cell::from(format_duration(u64::from(entry.duration))),
            timer,
        ];

        Row::new(cells).height(1)
    });

    let table = Table::new(rows)
        .header(header)
        .block(Block::default().title("Recent Time Entries").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .widths(&[
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(10),
            Constraint::Percentage(15),
        ]);

    frame.render_stateful_widget(table, area, &mut state.table_state);
}

pub fn handle_key(state: &mut TimeTrackingState, entries: &[TimeEntry], key: KeyCode) {
    match key {
        KeyCode::Down => state.next(entries.len()),
        KeyCode::Up => state.previous(entries.len()),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(entry) = state.selected_entry(entries) {
                state.timer.toggle(&entry.id);
            }
        }
        _ => {}
    }
}
