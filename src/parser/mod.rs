//! Boyo source parser
//!
//! This module transforms Boyo source lines into a list of [`Statement`]s:
//! - [`lexer`]: Tokenization (line → tokens)
//! - [`parse`]: The [`Parser`] and the line-by-line entry point
//! - [`expressions`]: Prefix-notation expression parsing
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! One statement per line:
//!
//! ```text
//! // comment
//! let A 0x10
//! def double _a => * 0x02 _a
//! main double A
//! print done
//! ```
//!
//! Hand-written recursive descent; a single error aborts the whole parse.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use ast::{BinOp, Expression, HexLiteral, SourceLocation, Statement};
pub use expressions::parse_prefix;
pub use lexer::{tokenize, Token, TokenKind};
pub use parse::{parse, ParseError, Parser};
