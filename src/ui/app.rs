//! Inspector application state and logic

use crate::codegen::{generate_statement, GenerateError, Region};
use crate::parser::ast::Statement;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// Rows moved by PgUp/PgDn
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Ast,
    Code,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> ast -> code)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Ast,
            FocusedPane::Ast => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Code,
            FocusedPane::Ast => FocusedPane::Source,
            FocusedPane::Code => FocusedPane::Ast,
        }
    }
}

/// The inspector state
pub struct App {
    /// The program being inspected
    pub source_lines: Vec<String>,
    pub statements: Vec<Statement>,

    /// Generated C++ per statement, same order as `statements`
    snippets: Vec<String>,

    /// 1-based source line -> statement index
    line_index: FxHashMap<usize, usize>,

    /// 1-based line under the cursor
    pub cursor_line: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub ast_scroll: usize,
    pub code_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Build the inspector, generating code for every statement up front.
    pub fn new(source_lines: Vec<String>, statements: Vec<Statement>) -> Result<Self, GenerateError> {
        let snippets = statements
            .iter()
            .map(generate_statement)
            .collect::<Result<Vec<_>, _>>()?;

        let line_index = statements
            .iter()
            .enumerate()
            .map(|(index, statement)| (statement.location().line, index))
            .collect();

        let mut app = App {
            source_lines,
            statements,
            snippets,
            line_index,
            cursor_line: 1,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            ast_scroll: 0,
            code_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        if let Some(first) = app.statements.first() {
            app.cursor_line = first.location().line;
        }
        Ok(app)
    }

    /// The statement on the cursor line, with its index.
    pub fn selected_statement(&self) -> Option<(usize, &Statement)> {
        let index = *self.line_index.get(&self.cursor_line)?;
        Some((index, &self.statements[index]))
    }

    /// The generated code and region for the selected statement.
    pub fn selected_code(&self) -> Option<(&str, Region)> {
        let (index, statement) = self.selected_statement()?;
        Some((self.snippets[index].as_str(), Region::of(statement)))
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Source on the left, AST above generated code on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_lines,
            self.cursor_line,
            &self.line_index,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        let selected = self.line_index.get(&self.cursor_line).copied();

        super::panes::render_ast_pane(
            frame,
            right_rows[0],
            selected.map(|index| (index, &self.statements[index])),
            self.focused_pane == FocusedPane::Ast,
            &mut self.ast_scroll,
        );

        super::panes::render_code_pane(
            frame,
            right_rows[1],
            selected.map(|index| {
                (
                    self.snippets[index].as_str(),
                    Region::of(&self.statements[index]),
                )
            }),
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.cursor_line,
            self.source_lines.len(),
            self.statements.len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => self.move_cursor_to(self.cursor_line.saturating_sub(1)),
            KeyCode::Down => self.move_cursor_to(self.cursor_line + 1),
            KeyCode::Char('n') | KeyCode::Right => self.next_statement(),
            KeyCode::Char('p') | KeyCode::Left => self.prev_statement(),
            KeyCode::PageUp => match self.focused_pane {
                FocusedPane::Source => {
                    self.move_cursor_to(self.cursor_line.saturating_sub(PAGE))
                }
                FocusedPane::Ast => self.ast_scroll = self.ast_scroll.saturating_sub(PAGE),
                FocusedPane::Code => self.code_scroll = self.code_scroll.saturating_sub(PAGE),
            },
            KeyCode::PageDown => match self.focused_pane {
                FocusedPane::Source => self.move_cursor_to(self.cursor_line + PAGE),
                FocusedPane::Ast => self.ast_scroll = self.ast_scroll.saturating_add(PAGE),
                FocusedPane::Code => self.code_scroll = self.code_scroll.saturating_add(PAGE),
            },
            _ => {}
        }
    }

    /// Move the cursor, clamped to the file, and reset the detail panes.
    fn move_cursor_to(&mut self, line: usize) {
        let last = self.source_lines.len().max(1);
        let line = line.clamp(1, last);
        if line != self.cursor_line {
            self.cursor_line = line;
            self.ast_scroll = 0;
            self.code_scroll = 0;
        }
        self.status_message = match self.selected_statement() {
            Some((index, statement)) => {
                format!("Statement {}: {}", index + 1, statement.kind_name())
            }
            None => format!("Line {}", self.cursor_line),
        };
    }

    /// Jump to the next line holding a statement
    fn next_statement(&mut self) {
        let next = self
            .statements
            .iter()
            .map(|s| s.location().line)
            .find(|&line| line > self.cursor_line);
        match next {
            Some(line) => self.move_cursor_to(line),
            None => self.status_message = "Already at the last statement".to_string(),
        }
    }

    /// Jump to the previous line holding a statement
    fn prev_statement(&mut self) {
        let prev = self
            .statements
            .iter()
            .map(|s| s.location().line)
            .filter(|&line| line < self.cursor_line)
            .last();
        match prev {
            Some(line) => self.move_cursor_to(line),
            None => self.status_message = "Already at the first statement".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    const SOURCE: [&str; 5] = [
        "// Example: Double a value",
        "let A 0x10",
        "",
        "def double _a => * 0x02 _a",
        "main double A",
    ];

    fn app() -> App {
        let lines: Vec<String> = SOURCE.iter().map(|s| s.to_string()).collect();
        let statements = parse(&lines).unwrap();
        App::new(lines, statements).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_starts_on_first_statement() {
        let app = app();

        assert_eq!(app.cursor_line, 1);
        assert!(matches!(
            app.selected_statement(),
            Some((0, Statement::Comment { .. }))
        ));
    }

    #[test]
    fn test_statement_navigation_skips_blank_lines() {
        let mut app = app();

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.cursor_line, 4);

        let (code, region) = app.selected_code().unwrap();
        assert_eq!(region, Region::Global);
        assert!(code.contains("multiply({0x02}, _a)"));

        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.cursor_line, 5);
        assert_eq!(app.status_message, "Already at the last statement");
        assert_eq!(app.selected_code().unwrap().1, Region::Entry);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.cursor_line, 4);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = app();

        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor_line, 1);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.cursor_line, 5);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor_line, 3);
        assert!(app.selected_statement().is_none());
        assert_eq!(app.status_message, "Line 3");
    }

    #[test]
    fn test_focus_and_quit() {
        let mut app = app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Ast);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Source);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_shows_all_panes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(screen.contains("Source"));
        assert!(screen.contains("AST [statement 2]"));
        assert!(screen.contains("Variable: A"));
        assert!(screen.contains("Generated C++ (global region)"));
        assert!(screen.contains("A = {0x10};"));
    }

    #[test]
    fn test_generation_errors_surface() {
        let lines = vec!["let A B".to_string()];
        let statements = parse(&lines).unwrap();

        assert!(App::new(lines, statements).is_err());
    }
}
