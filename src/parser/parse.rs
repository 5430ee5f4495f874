//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the [`parse`] entry point.
//!
//! # Parser Architecture
//!
//! Boyo has one statement per line, so a [`Parser`] owns the tokens of a single
//! line plus a cursor into them. The cursor only ever moves forward.
//! - This module: Parser struct, helper methods, and line dispatch
//! - `statements`: Parsing `let`, `def`, `main` and `print` statements
//! - `expressions`: Parsing prefix-notation expressions
//!
//! Parser methods are split across these files using `impl Parser` blocks.

use crate::parser::ast::*;
use crate::parser::lexer::{code_part, Lexer, Token, TokenKind, COMMENT_MARKER};
use log::debug;
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at {location}: {message}")]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
    /// The offending source line, when known.
    pub source_line: Option<String>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
            source_line: None,
        }
    }

    pub(crate) fn with_line(mut self, line: &str) -> Self {
        self.source_line = Some(line.to_string());
        self
    }

    /// The offending line with a caret under the error column.
    ///
    /// Columns count a single space between tokens, so the line is shown with
    /// its tokens re-joined the same way.
    pub fn snippet(&self) -> Option<String> {
        let line = self.source_line.as_ref()?;
        let code = code_part(line).split_whitespace().collect::<Vec<_>>().join(" ");
        Some(format!(
            "  {}\n  {}^",
            code,
            " ".repeat(self.location.column.saturating_sub(1))
        ))
    }
}

/// Recursive descent parser over the tokens of one line
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Tokenize `line` (1-based `line_number`) and prepare to parse it.
    ///
    /// A trailing comment is dropped; it never belongs to the statement.
    pub fn new(line: &str, line_number: usize) -> Self {
        let lexer = Lexer::new(line, line_number);
        let mut tokens = lexer.tokenize();
        if matches!(tokens.last(), Some(t) if t.kind == TokenKind::Comment) {
            tokens.pop();
        }
        tokens.push(lexer.end_of_line());
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse over an existing token buffer. An end token is appended if missing.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof) {
            let location = tokens
                .last()
                .map(|t| {
                    SourceLocation::new(
                        t.location.line,
                        t.location.column + t.text.chars().count(),
                    )
                })
                .unwrap_or_else(|| SourceLocation::new(1, 1));
            tokens.push(Token::new(TokenKind::Eof, "", location));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        // The buffer always ends with Eof and the cursor never passes it
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.current_location())
    }

    /// Consume an identifier, or fail with `message` naming what was found instead.
    pub(crate) fn expect_identifier(&mut self, message: &str) -> Result<String, ParseError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance().text)
        } else {
            Err(self.error(format!("{}, found {}", message, self.peek())))
        }
    }

    /// Fail unless every token of the line has been consumed.
    pub(crate) fn expect_end(&self, statement: &str) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error(format!(
                "Unexpected {} after {} statement",
                self.peek(),
                statement
            )))
        }
    }
}

/// Parse source lines into statements, one per non-blank line.
///
/// The first error aborts the whole parse; no partial list is returned.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Statement>, ParseError> {
    let mut statements = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(text) = trimmed.strip_prefix(COMMENT_MARKER) {
            let column = line.len() - line.trim_start().len() + 1;
            statements.push(Statement::Comment {
                text: text.trim().to_string(),
                location: SourceLocation::new(line_number, column),
            });
            continue;
        }

        let mut parser = Parser::new(line, line_number);
        let statement = parser
            .parse_statement()
            .map_err(|e| e.with_line(line))?;
        statements.push(statement);
    }

    debug!("parsed {} statements from {} lines", statements.len(), lines.len());
    Ok(statements)
}
