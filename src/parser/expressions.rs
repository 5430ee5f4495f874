//! Expression parsing implementation
//!
//! Boyo expressions are written in prefix (Polish) notation:
//!
//! ```text
//! expr := OP expr expr | HEX | IDENT | PARAM
//! ```
//!
//! An operator always precedes its two fully parsed operands, so there is no
//! precedence, associativity or grouping to resolve. Each step consumes tokens
//! by advancing the parser's cursor.
//!
//! Print payloads are lifted token by token with [`lift_print_token`], which
//! keeps unclassified text instead of rejecting it.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{ParseError, Parser};

/// An operator still waiting for its operands.
struct PendingOperator {
    op: BinOp,
    left: Option<Expression>,
}

impl Parser {
    /// Parse one prefix expression starting at the cursor.
    ///
    /// Operators wait on an explicit stack until both operands are complete,
    /// so nesting depth is bounded by memory only.
    pub(crate) fn parse_prefix_expression(&mut self) -> Result<Expression, ParseError> {
        let mut pending: Vec<PendingOperator> = Vec::new();

        loop {
            let token = self.peek().clone();

            let mut operand = match token.kind {
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        "Unexpected end of tokens in expression",
                        token.location,
                    ))
                }
                TokenKind::Plus | TokenKind::Minus | TokenKind::Star => {
                    self.advance();
                    let op = BinOp::from_symbol(&token.text).ok_or_else(|| {
                        ParseError::new(
                            format!("Unknown operator '{}'", token.text),
                            token.location,
                        )
                    })?;
                    pending.push(PendingOperator { op, left: None });
                    continue;
                }
                kind if kind.is_keyword() => {
                    return Err(ParseError::new(
                        format!("Unexpected keyword in expression: {}", token.text),
                        token.location,
                    ))
                }
                _ => {
                    self.advance();
                    lift_token(&token)?
                }
            };

            // A finished operand completes every operator that already has its left side
            loop {
                match pending.pop() {
                    None => return Ok(operand),
                    Some(PendingOperator {
                        op,
                        left: Some(left),
                    }) => operand = Expression::operator(op, left, operand),
                    Some(PendingOperator { op, left: None }) => {
                        pending.push(PendingOperator {
                            op,
                            left: Some(operand),
                        });
                        break;
                    }
                }
            }
        }
    }
}

/// Lift a single token into a leaf expression.
///
/// Keywords become [`Expression::Keyword`]; callers that need a value reject
/// them. Operators must go through the prefix parser.
pub fn lift_token(token: &Token) -> Result<Expression, ParseError> {
    match token.kind {
        TokenKind::HexLiteral => HexLiteral::new(token.text.as_str())
            .map(Expression::HexLiteral)
            .map_err(|e| ParseError::new(e.to_string(), token.location)),
        TokenKind::Ident => Ok(Expression::Identifier(token.text.clone())),
        TokenKind::Param => Ok(Expression::Parameter(token.text.clone())),
        TokenKind::Let | TokenKind::Def | TokenKind::Main | TokenKind::Print => {
            Ok(Expression::Keyword(token.text.clone()))
        }
        TokenKind::Plus | TokenKind::Minus | TokenKind::Star => Err(ParseError::new(
            format!("Operator '{}' must be followed by two operands", token.text),
            token.location,
        )),
        TokenKind::Arrow | TokenKind::Equals => Err(ParseError::new(
            format!("Unexpected symbol token in expression: {}", token.text),
            token.location,
        )),
        TokenKind::Unknown => Err(ParseError::new(
            format!("Unrecognized token in expression: {}", token.text),
            token.location,
        )),
        TokenKind::Comment | TokenKind::Eof => Err(ParseError::new(
            format!("Unexpected {} in expression", token),
            token.location,
        )),
    }
}

/// Lift one token of a `print` payload.
///
/// Like [`lift_token`], except that unclassified text such as `done!` or
/// `"x"` is kept verbatim as [`Expression::Text`].
pub fn lift_print_token(token: &Token) -> Result<Expression, ParseError> {
    match token.kind {
        TokenKind::Unknown => Ok(Expression::Text(token.text.clone())),
        _ => lift_token(token),
    }
}

/// Parse one prefix expression from the front of `tokens`.
///
/// Returns the expression and the number of tokens it consumed. Tokens after
/// the expression are left alone.
pub fn parse_prefix(tokens: &[Token]) -> Result<(Expression, usize), ParseError> {
    let mut parser = Parser::from_tokens(tokens.to_vec());
    let expression = parser.parse_prefix_expression()?;
    Ok((expression, parser.position()))
}
