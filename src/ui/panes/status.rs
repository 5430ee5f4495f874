//! Status bar rendering with position and keybindings

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    cursor_line: usize,
    total_lines: usize,
    statement_count: usize,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Line::from(vec![
        Span::styled(
            format!(" Line {}/{} ", cursor_line, total_lines.max(1)),
            Style::default()
                .bg(DEFAULT_THEME.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} statements ", statement_count),
            Style::default().fg(DEFAULT_THEME.statement_kind),
        ),
        Span::styled(" | ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(message.to_string(), Style::default().fg(DEFAULT_THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(left), layout[0]);

    let keys = Line::from(vec![
        Span::styled("↑↓", Style::default().fg(DEFAULT_THEME.highlight)),
        Span::raw(" line  "),
        Span::styled("n/p", Style::default().fg(DEFAULT_THEME.highlight)),
        Span::raw(" statement  "),
        Span::styled("Tab", Style::default().fg(DEFAULT_THEME.highlight)),
        Span::raw(" focus  "),
        Span::styled("PgUp/PgDn", Style::default().fg(DEFAULT_THEME.highlight)),
        Span::raw(" scroll  "),
        Span::styled("q", Style::default().fg(DEFAULT_THEME.highlight)),
        Span::raw(" quit "),
    ]);
    frame.render_widget(
        Paragraph::new(keys).alignment(Alignment::Right),
        layout[1],
    );
}
