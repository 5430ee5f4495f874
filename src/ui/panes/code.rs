//! Generated code pane

use super::{clamp_scroll, pane_block};
use crate::codegen::Region;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HELPERS: [&str; 4] = ["add", "subtract", "multiply", "print_vector"];

/// Color helper calls; everything else is plain.
fn highlight_code_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut word = String::new();

    let flush = |word: &mut String, spans: &mut Vec<Span<'static>>| {
        if word.is_empty() {
            return;
        }
        let style = match word.as_str() {
            w if HELPERS.contains(&w) => Style::default().fg(DEFAULT_THEME.helper),
            "return" | "auto" | "const" => Style::default().fg(DEFAULT_THEME.keyword),
            w if w.starts_with("0x") => Style::default().fg(DEFAULT_THEME.literal),
            _ => Style::default().fg(DEFAULT_THEME.text),
        };
        spans.push(Span::styled(std::mem::take(word), style));
    };

    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush(&mut word, &mut spans);
            spans.push(Span::styled(
                c.to_string(),
                Style::default().fg(DEFAULT_THEME.text),
            ));
        }
    }
    flush(&mut word, &mut spans);

    Line::from(spans)
}

pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    code: Option<(&str, Region)>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let Some((code, region)) = code else {
        let paragraph = Paragraph::new("(nothing generated)")
            .block(pane_block(" Generated C++ ".to_string(), is_focused))
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = pane_block(
        format!(" Generated C++ ({} region) ", region.name()),
        is_focused,
    );

    let lines: Vec<Line> = code.lines().map(highlight_code_line).collect();
    let visible = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll, lines.len(), visible);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
