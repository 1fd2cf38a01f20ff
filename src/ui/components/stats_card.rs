use tui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A headline number with an optional caption
pub struct StatsCard<'a> {
    pub title: &'a str,
    pub value: String,
    pub subtitle: Option<String>,
    pub color: Color,
}

pub fn render_stats_card<B: Backend>(frame: &mut Frame<B>, area: Rect, card: &StatsCard) {
    let mut lines = vec![Spans::from(Span::styled(
        card.value.clone(),
        Style::default().fg(card.color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = &card.subtitle {
        lines.push(Spans::from(Span::styled(
            subtitle.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(card.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card.color)),
    );

    frame.render_widget(paragraph, area);
}
