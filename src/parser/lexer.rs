//! Lexer (tokenizer) for Boyo source lines
//!
//! Each line is split on whitespace and every piece is classified on its own.
//! A `//` marker turns the remainder of the line into a single comment token.
//! The lexer never fails: text it does not recognize becomes
//! [`TokenKind::Unknown`] and is rejected later by the parser if it ends up
//! somewhere that matters.

use super::ast::SourceLocation;
use std::fmt;

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: &str = "//";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Let,
    Def,
    Main,
    Print,

    // Names
    Ident,
    Param, // _a, _b, ...

    // Operators
    Plus,  // +
    Minus, // -
    Star,  // *

    // Literals and symbols
    HexLiteral, // 0x1234
    Arrow,      // =>
    Equals,     // =

    Comment,
    Eof,
    Unknown,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Let | TokenKind::Def | TokenKind::Main | TokenKind::Print
        )
    }

    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus | TokenKind::Star)
    }
}

/// A classified piece of a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.text),
            TokenKind::Param => write!(f, "parameter '{}'", self.text),
            TokenKind::HexLiteral => write!(f, "hex literal '{}'", self.text),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Eof => write!(f, "end of line"),
            TokenKind::Unknown => write!(f, "unrecognized token '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Classify a single whitespace-free piece of text.
///
/// Keywords and symbols must match exactly, so `letter` is an identifier and
/// not `let` followed by garbage.
pub fn classify(text: &str) -> TokenKind {
    match text {
        "let" => TokenKind::Let,
        "def" => TokenKind::Def,
        "main" => TokenKind::Main,
        "print" => TokenKind::Print,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Star,
        "=>" => TokenKind::Arrow,
        "=" => TokenKind::Equals,
        _ if text.starts_with(COMMENT_MARKER) => TokenKind::Comment,
        _ if text.starts_with("0x") => TokenKind::HexLiteral,
        _ if text.starts_with('_') => TokenKind::Param,
        _ if text.chars().all(|c| c.is_alphanumeric() || c == '_') => TokenKind::Ident,
        _ => TokenKind::Unknown,
    }
}

/// The part of a line before any comment marker.
pub(crate) fn code_part(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Lexer for a single source line
pub struct Lexer<'a> {
    line: &'a str,
    line_number: usize,
}

impl<'a> Lexer<'a> {
    /// `line_number` is 1-based.
    pub fn new(line: &'a str, line_number: usize) -> Self {
        Self { line, line_number }
    }

    /// Tokenize the line. Blank lines produce no tokens.
    pub fn tokenize(&self) -> Vec<Token> {
        let (code, comment) = match self.line.find(COMMENT_MARKER) {
            Some(pos) => (&self.line[..pos], Some(pos)),
            None => (self.line, None),
        };

        let mut tokens = Vec::new();
        let mut column = 0;
        for piece in code.split_whitespace() {
            tokens.push(Token::new(
                classify(piece),
                piece,
                SourceLocation::new(self.line_number, column + 1),
            ));
            column += piece.chars().count() + 1;
        }

        if let Some(pos) = comment {
            let column = self.line[..pos].chars().count() + 1;
            tokens.push(Token::new(
                TokenKind::Comment,
                &self.line[pos..],
                SourceLocation::new(self.line_number, column),
            ));
        }

        tokens
    }

    /// The end-of-input token, placed right after the last code token.
    ///
    /// Uses the same single-separator column rule as the other tokens.
    pub fn end_of_line(&self) -> Token {
        let column = code_part(self.line)
            .split_whitespace()
            .map(|piece| piece.chars().count() + 1)
            .sum::<usize>()
            .max(1);
        Token::new(
            TokenKind::Eof,
            "",
            SourceLocation::new(self.line_number, column),
        )
    }
}

/// Tokenize every line, in order, followed by a single [`TokenKind::Eof`].
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<Token> {
    let mut tokens: Vec<Token> = lines
        .iter()
        .enumerate()
        .flat_map(|(index, line)| Lexer::new(line.as_ref(), index + 1).tokenize())
        .collect();

    let last_line = lines.len().max(1);
    let eof = match lines.last() {
        Some(line) => Lexer::new(line.as_ref(), last_line).end_of_line(),
        None => Token::new(TokenKind::Eof, "", SourceLocation::new(1, 1)),
    };
    tokens.push(eof);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        Lexer::new(line, 1).tokenize().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = Lexer::new("def double _a => * 0x10 _a", 1).tokenize();

        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Def,
                TokenKind::Ident,
                TokenKind::Param,
                TokenKind::Arrow,
                TokenKind::Star,
                TokenKind::HexLiteral,
                TokenKind::Param,
            ]
        );
        assert_eq!(tokens[1].text, "double");
        assert_eq!(tokens[5].text, "0x10");
    }

    #[test]
    fn test_columns_accumulate() {
        let tokens = Lexer::new("let A 0x10", 3).tokenize();

        assert_eq!(tokens[0].location, SourceLocation::new(3, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(3, 5));
        assert_eq!(tokens[2].location, SourceLocation::new(3, 7));
    }

    #[test]
    fn test_end_of_line_follows_last_token() {
        assert_eq!(Lexer::new("let A", 1).end_of_line().location.column, 6);
        assert_eq!(
            Lexer::new("  let   A   // note", 2).end_of_line().location,
            SourceLocation::new(2, 6)
        );
        assert_eq!(Lexer::new("", 1).end_of_line().location.column, 1);
    }

    #[test]
    fn test_keywords_are_exact() {
        assert_eq!(
            kinds("letter define mainly printer LET"),
            vec![TokenKind::Ident; 5]
        );
        assert_eq!(
            kinds("let def main print"),
            vec![
                TokenKind::Let,
                TokenKind::Def,
                TokenKind::Main,
                TokenKind::Print
            ]
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(
            kinds("+ - * => = ==>"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Arrow,
                TokenKind::Equals,
                TokenKind::Unknown,
            ]
        );
    }

    #[test]
    fn test_prefix_classification() {
        // Hex literals are classified by prefix and validated by the parser
        assert_eq!(kinds("0xZZ"), vec![TokenKind::HexLiteral]);
        assert_eq!(kinds("_"), vec![TokenKind::Param]);
        assert_eq!(kinds("a-b"), vec![TokenKind::Unknown]);
    }

    #[test]
    fn test_comments() {
        let tokens = Lexer::new("let A 0x10 // the answer", 1).tokenize();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].kind, TokenKind::Comment);
        assert_eq!(tokens[3].text, "// the answer");
        assert_eq!(tokens[3].location.column, 12);

        let tokens = Lexer::new("// only a comment", 1).tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "// only a comment");
    }

    #[test]
    fn test_blank_lines() {
        assert!(Lexer::new("", 1).tokenize().is_empty());
        assert!(Lexer::new("   \t ", 1).tokenize().is_empty());
    }

    #[test]
    fn test_tokenize_lines_appends_single_eof() {
        let tokens = tokenize(&["let A 0x10", "", "main f A"]);

        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[3].location.line, 3);
        assert_eq!(tokens[6].kind, TokenKind::Eof);

        let tokens = tokenize::<&str>(&[]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }
}
