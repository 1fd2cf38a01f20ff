use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

use crate::models::Project;
use crate::stats::{
    DashboardSummary, MemberWorkload, StatusFilter, filter_projects, task_progress, team_workload,
};
use crate::ui::components::{
    bar::{bar, stacked_bar},
    project_card::project_card,
    stats_card::{StatsCard, render_stats_card},
};

const LABEL_WIDTH: usize = 20;

// Represents the state of the dashboard and projects screens
pub struct DashboardState {
    filter: StatusFilter,
    list_state: ListState,
}

impl DashboardState {
    pub fn new(filter: StatusFilter, projects: &[Project]) -> Self {
        let mut state = Self {
            filter,
            list_state: ListState::default(),
        };
        state.reset_selection(projects);
        state
    }

    #[cfg(test)]
    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter, projects: &[Project]) {
        if self.filter != filter {
            tracing::debug!(%filter, "project filter changed");
        }
        self.filter = filter;
        self.reset_selection(projects);
    }

    fn reset_selection(&mut self, projects: &[Project]) {
        let visible = filter_projects(projects, self.filter).len();
        self.list_state.select(if visible == 0 { None } else { Some(0) });
    }

    pub fn next(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= visible - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    visible - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }
}

fn filter_color(filter: StatusFilter) -> Color {
    match filter {
        StatusFilter::All => Color::Blue,
        StatusFilter::OnTrack => Color::Green,
        StatusFilter::AtRisk => Color::Yellow,
        StatusFilter::Delayed => Color::Red,
    }
}

fn filter_key(filter: StatusFilter) -> char {
    match filter {
        StatusFilter::All => 'a',
        StatusFilter::OnTrack => 'o',
        StatusFilter::AtRisk => 'r',
        StatusFilter::Delayed => 'd',
    }
}

pub fn render_dashboard<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    projects: &[Project],
    state: &mut DashboardState,
) {
    let workload = team_workload(projects);
    let chart_height = projects.len().max(workload.len()) as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(chart_height),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ].as_ref())
        .split(area);

    render_stats(frame, chunks[0], projects);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)].as_ref())
        .split(chunks[1]);
    render_task_chart(frame, charts[0], projects);
    render_team_workload(frame, charts[1], &workload);

    render_filters(frame, chunks[2], state.filter);

    let visible = filter_projects(projects, state.filter);
    let items: Vec<_> = visible.iter().map(|p| project_card(p)).collect();
    let title = format!("Active Projects ({})", visible.len());
    let cards = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(cards, chunks[3], &mut state.list_state);

    let help = Paragraph::new("<A/O/R/D> Filter | <Up/Down> Browse | <1-5/Tab> Switch View | <[> Sidebar | <Q> Quit")
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));
    frame.render_widget(help, chunks[4]);
}

fn render_stats<B: Backend>(frame: &mut Frame<B>, area: Rect, projects: &[Project]) {
    let summary = DashboardSummary::from_projects(projects);

    let cards = [
        StatsCard {
            title: "Total Projects",
            value: summary.total_projects.to_string(),
            subtitle: None,
            color: Color::Blue,
        },
        StatsCard {
            title: "Completed Tasks",
            value: format!("{}/{}", summary.completed_tasks, summary.total_tasks),
            subtitle: Some(format!("{}% overall progress", summary.overall_progress)),
            color: Color::Green,
        },
        StatsCard {
            title: "On Track",
            value: summary.on_track.to_string(),
            subtitle: Some(format!("{} need attention", summary.needs_attention())),
            color: Color::LightGreen,
        },
        StatsCard {
            title: "Hours Logged",
            value: format!("{}h", summary.total_hours_logged),
            subtitle: Some("This week".to_string()),
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

fn render_task_chart<B: Backend>(frame: &mut Frame<B>, area: Rect, projects: &[Project]) {
    let rows = task_progress(projects);
    let max = rows
        .iter()
        .map(|r| f64::from(r.completed + r.remaining))
        .fold(0.0, f64::max);
    let width = (area.width as usize).saturating_sub(LABEL_WIDTH + 12);

    let lines: Vec<Spans> = rows
        .iter()
        .map(|row| {
            let mut spans = vec![Span::raw(format!("{:<w$}", row.label, w = LABEL_WIDTH))];
            spans.extend(stacked_bar(
                f64::from(row.completed),
                f64::from(row.remaining),
                max,
                width,
                (Color::Green, Color::Gray),
            ));
            spans.push(Span::raw(format!(" {}/{}", row.completed, row.completed + row.remaining)));
            Spans::from(spans)
        })
        .collect();

    let chart = Paragraph::new(lines).block(
        Block::default()
            .title("Task Progress (completed / remaining)")
            .borders(Borders::ALL),
    );
    frame.render_widget(chart, area);
}

fn render_team_workload<B: Backend>(frame: &mut Frame<B>, area: Rect, workload: &[MemberWorkload]) {
    let width = (area.width as usize).saturating_sub(24);

    let lines: Vec<Spans> = workload
        .iter()
        .map(|member| {
            let noun = if member.projects == 1 { "project" } else { "projects" };
            let mut spans = vec![Span::raw(format!(
                "{:<8} {} {:<9}",
                member.member, member.projects, noun
            ))];
            spans.extend(bar(member.share, width, Color::Blue));
            Spans::from(spans)
        })
        .collect();

    let panel = Paragraph::new(lines).block(Block::default().title("Team Workload").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_filters<B: Backend>(frame: &mut Frame<B>, area: Rect, active: StatusFilter) {
    let mut spans = Vec::new();
    for filter in StatusFilter::ALL {
        let style = if filter == active {
            Style::default()
                .bg(filter_color(filter))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" <{}> {} ", filter_key(filter).to_ascii_uppercase(), filter.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    let buttons = Paragraph::new(Spans::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(buttons, area);
}

pub fn handle_key(state: &mut DashboardState, projects: &[Project], key: KeyCode) {
    match key {
        KeyCode::Char(c) => {
            if let Some(filter) = StatusFilter::ALL
                .into_iter()
                .find(|f| filter_key(*f) == c.to_ascii_lowercase())
            {
                state.set_filter(filter, projects);
            }
        }
        KeyCode::Down => state.next(filter_projects(projects, state.filter).len()),
        KeyCode::Up => state.previous(filter_projects(projects, state.filter).len()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use tui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::seed;

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol.as_str()).collect()
    }

    #[test]
    fn filter_keys_change_filter_and_reset_selection() {
        let projects = seed::projects();
        let mut state = DashboardState::new(StatusFilter::All, &projects);

        handle_key(&mut state, &projects, KeyCode::Down);
        handle_key(&mut state, &projects, KeyCode::Down);
        assert_eq!(state.selected(), Some(2));

        handle_key(&mut state, &projects, KeyCode::Char('o'));
        assert_eq!(state.filter(), StatusFilter::OnTrack);
        assert_eq!(state.selected(), Some(0));

        handle_key(&mut state, &projects, KeyCode::Char('R'));
        assert_eq!(state.filter(), StatusFilter::AtRisk);

        handle_key(&mut state, &projects, KeyCode::Char('d'));
        assert_eq!(state.filter(), StatusFilter::Delayed);

        handle_key(&mut state, &projects, KeyCode::Char('a'));
        assert_eq!(state.filter(), StatusFilter::All);
    }

    #[test]
    fn selection_wraps_within_visible_cards() {
        let projects = seed::projects();
        let mut state = DashboardState::new(StatusFilter::OnTrack, &projects);

        handle_key(&mut state, &projects, KeyCode::Down);
        assert_eq!(state.selected(), Some(1));
        handle_key(&mut state, &projects, KeyCode::Down);
        assert_eq!(state.selected(), Some(0));
        handle_key(&mut state, &projects, KeyCode::Up);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn empty_filter_result_has_no_selection() {
        let mut projects = seed::projects();
        projects.retain(|p| p.status != crate::models::ProjectStatus::Delayed);
        let mut state = DashboardState::new(StatusFilter::Delayed, &projects);

        assert_eq!(state.selected(), None);
        handle_key(&mut state, &projects, KeyCode::Down);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn renders_summary_and_cards() {
        let projects = seed::projects();
        let mut state = DashboardState::new(StatusFilter::All, &projects);
        let mut terminal = Terminal::new(TestBackend::new(140, 60)).unwrap();

        terminal
            .draw(|f| {
                let area = f.size();
                render_dashboard(f, area, &projects, &mut state);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("120/200"));
        assert!(text.contains("60% overall progress"));
        assert!(text.contains("2 need attention"));
        assert!(text.contains("292h"));
        assert!(text.contains("Active Projects (4)"));
        assert!(text.contains("Team Workload"));
    }

    #[test]
    fn renders_with_no_projects() {
        let mut state = DashboardState::new(StatusFilter::All, &[]);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|f| {
                let area = f.size();
                render_dashboard(f, area, &[], &mut state);
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("0/0"));
        assert!(text.contains("0% overall progress"));
        assert!(text.contains("Active Projects (0)"));
    }
}
