//! Inspector color palette

use ratatui::style::Color;

pub struct Theme {
    pub text: Color,
    pub accent: Color,
    pub highlight: Color,
    pub comment: Color,
    pub marker: Color,
    pub invalid: Color,
    pub keyword: Color,
    pub literal: Color,
    pub parameter: Color,
    pub helper: Color,
    pub statement_kind: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub cursor_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    text: Color::Rgb(205, 214, 244),
    accent: Color::Rgb(137, 180, 250),    // '=>' and '='
    highlight: Color::Rgb(250, 179, 135), // operators, key hints
    comment: Color::Rgb(108, 112, 134),
    marker: Color::Rgb(166, 227, 161),
    invalid: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    literal: Color::Rgb(250, 179, 135),
    parameter: Color::Rgb(245, 194, 231),
    helper: Color::Rgb(249, 226, 175),
    statement_kind: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    cursor_line_bg: Color::Rgb(50, 50, 70),
};
