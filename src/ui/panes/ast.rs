//! AST pane: tree view of the selected statement

use super::{clamp_scroll, pane_block};
use crate::parser::ast::Statement;
use crate::printer::statement_tree;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_ast_pane(
    frame: &mut Frame,
    area: Rect,
    statement: Option<(usize, &Statement)>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let Some((index, statement)) = statement else {
        let paragraph = Paragraph::new("(no statement on this line)")
            .block(pane_block(" AST ".to_string(), is_focused))
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = pane_block(format!(" AST [statement {}] ", index + 1), is_focused);
    let tree = statement_tree(statement);

    let visible = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll, tree.len(), visible);

    let lines: Vec<Line> = tree
        .into_iter()
        .enumerate()
        .map(|(row, text)| {
            if row == 0 {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(DEFAULT_THEME.statement_kind)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(DEFAULT_THEME.text)))
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
