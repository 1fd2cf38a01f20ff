use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::View;

const EXPANDED_WIDTH: u16 = 24;
const COLLAPSED_WIDTH: u16 = 7;
const FOOTER_HEIGHT: u16 = 4;

pub enum SidebarAction {
    Quit,
    Select(View),
    ToggleCollapse,
}

pub fn width(collapsed: bool) -> u16 {
    if collapsed {
        COLLAPSED_WIDTH
    } else {
        EXPANDED_WIDTH
    }
}

pub fn render_sidebar<B: Backend>(frame: &mut Frame<B>, area: Rect, current: View, collapsed: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(FOOTER_HEIGHT)].as_ref())
        .split(area);

    let items: Vec<ListItem> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let shortcut = Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray));
            if collapsed {
                ListItem::new(Spans::from(shortcut))
            } else {
                ListItem::new(Spans::from(vec![shortcut, Span::raw(view.label())]))
            }
        })
        .collect();

    let title = if collapsed { "PT" } else { "ProjectTracker" };
    let menu = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(View::ALL.iter().position(|v| *v == current));

    frame.render_stateful_widget(menu, chunks[0], &mut list_state);

    render_user(frame, chunks[1], collapsed);
}

fn render_user<B: Backend>(frame: &mut Frame<B>, area: Rect, collapsed: bool) {
    let initials = Span::styled(
        "JD",
        Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
    );

    let lines = if collapsed {
        vec![Spans::from(initials)]
    } else {
        vec![
            Spans::from(vec![initials, Span::raw(" John Doe")]),
            Spans::from(Span::styled("   Admin", Style::default().fg(Color::Gray))),
        ]
    };

    frame.render_widget(Paragraph::new(lines).block(Block::default().borders(Borders::ALL)), area);
}

/// Keys that work on every screen
pub fn handle_key(current: View, key: KeyCode) -> Option<SidebarAction> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(SidebarAction::Quit),
        KeyCode::Char('[') => Some(SidebarAction::ToggleCollapse),
        KeyCode::Tab => Some(SidebarAction::Select(current.next())),
        KeyCode::BackTab => Some(SidebarAction::Select(current.previous())),
        KeyCode::Char(c) => View::from_shortcut(c).map(SidebarAction::Select),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use tui::{backend::TestBackend, Terminal};

    use super::*;

    fn selected(action: Option<SidebarAction>) -> Option<View> {
        match action {
            Some(SidebarAction::Select(view)) => Some(view),
            _ => None,
        }
    }

    #[test]
    fn global_keys() {
        assert!(matches!(handle_key(View::Dashboard, KeyCode::Char('q')), Some(SidebarAction::Quit)));
        assert!(matches!(handle_key(View::Dashboard, KeyCode::Esc), Some(SidebarAction::Quit)));
        assert!(matches!(
            handle_key(View::Dashboard, KeyCode::Char('[')),
            Some(SidebarAction::ToggleCollapse)
        ));
        assert_eq!(selected(handle_key(View::Dashboard, KeyCode::Char('3'))), Some(View::TimeTracking));
        assert_eq!(selected(handle_key(View::Settings, KeyCode::Tab)), Some(View::Dashboard));
        assert_eq!(selected(handle_key(View::Dashboard, KeyCode::BackTab)), Some(View::Settings));
        assert!(handle_key(View::Dashboard, KeyCode::Char('o')).is_none());
        assert!(handle_key(View::Dashboard, KeyCode::Down).is_none());
    }

    #[test]
    fn collapsed_sidebar_hides_labels() {
        let mut terminal = Terminal::new(TestBackend::new(width(true), 14)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_sidebar(f, area, View::Analytics, true);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol.as_str())
            .collect();
        assert!(text.contains("PT"));
        assert!(text.contains("JD"));
        assert!(!text.contains("Analytics"));
        assert!(!text.contains("John Doe"));
    }

    #[test]
    fn expanded_sidebar_lists_every_view() {
        let mut terminal = Terminal::new(TestBackend::new(width(false), 14)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_sidebar(f, area, View::Dashboard, false);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol.as_str())
            .collect();
        assert!(text.contains("ProjectTracker"));
        for view in View::ALL {
            assert!(text.contains(view.label()), "missing {}", view.label());
        }
        assert!(text.contains("JD John Doe"));
        assert!(text.contains("Admin"));
    }
}
