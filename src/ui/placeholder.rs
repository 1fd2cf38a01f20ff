use tui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Style},
    text::Spans,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::View;

/// Views that exist in the menu but have no content yet
pub fn render_placeholder<B: Backend>(frame: &mut Frame<B>, area: Rect, view: View) {
    let text = vec![
        Spans::from(""),
        Spans::from(format!("{} view coming soon...", view.label())),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().title(view.label()).borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(paragraph, area);
}
