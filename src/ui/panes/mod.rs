//! TUI pane rendering modules
//!
//! - [`source`]: Source display with syntax highlighting and the cursor line
//! - [`ast`]: Tree view of the statement under the cursor
//! - [`code`]: C++ generated for that statement
//! - [`status`]: Status bar with position and keybindings
//!
//! Each pane module exports a `render_*` function that takes the frame, its
//! area and whatever state it shows. Scroll offsets are clamped in place.

pub mod ast;
pub mod code;
pub mod source;
pub mod status;

pub use ast::render_ast_pane;
pub use code::render_code_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style.
pub(crate) fn pane_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll` so that at least the last page of `total` rows stays visible.
pub(crate) fn clamp_scroll(scroll: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *scroll = (*scroll).min(total - visible);
    } else {
        *scroll = 0;
    }
}
