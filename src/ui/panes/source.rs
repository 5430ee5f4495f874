//! Source pane rendering with syntax highlighting
//!
//! Words are colored by the same classification the lexer uses, so what is
//! highlighted as a keyword is exactly what the parser treats as one. Lines
//! that produced a statement carry its number in the gutter.

use super::pane_block;
use crate::parser::lexer::{classify, TokenKind, COMMENT_MARKER};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashMap;

/// Highlight one source line
pub fn highlight_source_line(line: &str) -> Vec<Span<'static>> {
    let (code, comment) = match line.find(COMMENT_MARKER) {
        Some(pos) => (&line[..pos], Some(&line[pos..])),
        None => (line, None),
    };

    let mut spans = Vec::new();
    let mut word = String::new();
    for c in code.chars() {
        if c.is_whitespace() {
            if !word.is_empty() {
                spans.push(styled_word(std::mem::take(&mut word)));
            }
            spans.push(Span::raw(c.to_string()));
        } else {
            word.push(c);
        }
    }
    if !word.is_empty() {
        spans.push(styled_word(word));
    }

    if let Some(comment) = comment {
        spans.push(Span::styled(
            comment.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    spans
}

fn styled_word(word: String) -> Span<'static> {
    let style = match classify(&word) {
        kind if kind.is_keyword() => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        kind if kind.is_operator() => Style::default().fg(DEFAULT_THEME.highlight),
        TokenKind::HexLiteral => Style::default().fg(DEFAULT_THEME.literal),
        TokenKind::Param => Style::default().fg(DEFAULT_THEME.parameter),
        TokenKind::Arrow | TokenKind::Equals => Style::default().fg(DEFAULT_THEME.accent),
        TokenKind::Unknown => Style::default().fg(DEFAULT_THEME.invalid),
        _ => Style::default().fg(DEFAULT_THEME.text),
    };
    Span::styled(word, style)
}

/// Render the source pane, keeping `cursor_line` (1-based) in view.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    cursor_line: usize,
    line_index: &FxHashMap<usize, usize>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Source ".to_string(), is_focused);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(empty file)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = area.height.saturating_sub(2).max(1) as usize;
    let cursor_row = cursor_line.saturating_sub(1);
    if cursor_row < *scroll {
        *scroll = cursor_row;
    } else if cursor_row >= *scroll + visible {
        *scroll = cursor_row + 1 - visible;
    }

    let rendered: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible)
        .map(|(row, text)| {
            let number = row + 1;
            let is_cursor = number == cursor_line;

            let marker = match line_index.get(&number) {
                Some(statement) => format!("[{:>2}]", statement + 1),
                None => "    ".to_string(),
            };
            let arrow = if is_cursor { "→ " } else { "  " };

            let mut spans = vec![
                Span::styled(
                    format!("{:>4} ", number),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.statement_kind)),
                Span::styled(arrow, Style::default().fg(DEFAULT_THEME.marker)),
            ];
            spans.extend(highlight_source_line(text));

            let line = Line::from(spans);
            if is_cursor {
                line.style(Style::default().bg(DEFAULT_THEME.cursor_line_bg))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(rendered).block(block), area);
}
