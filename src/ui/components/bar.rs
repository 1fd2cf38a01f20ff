use tui::{
    style::{Color, Style},
    text::Span,
};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Number of cells `value` occupies when `max` spans `width` cells.
pub fn scaled(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    cells.min(width)
}

/// A single-colour horizontal bar filled to `fraction` of `width`.
pub fn bar(fraction: f64, width: usize, color: Color) -> Vec<Span<'static>> {
    let filled = scaled(fraction.clamp(0.0, 1.0), 1.0, width);
    vec![
        Span::styled(FILLED.repeat(filled), Style::default().fg(color)),
        Span::styled(EMPTY.repeat(width - filled), Style::default().fg(Color::DarkGray)),
    ]
}

/// Two stacked segments, both measured against `max`.
pub fn stacked_bar(
    first: f64,
    second: f64,
    max: f64,
    width: usize,
    colors: (Color, Color),
) -> Vec<Span<'static>> {
    let first_cells = scaled(first, max, width);
    let second_cells = scaled(second, max, width).min(width - first_cells);
    vec![
        Span::styled(FILLED.repeat(first_cells), Style::default().fg(colors.0)),
        Span::styled(FILLED.repeat(second_cells), Style::default().fg(colors.1)),
        Span::raw(" ".repeat(width - first_cells - second_cells)),
    ]
}
