// AST (Abstract Syntax Tree) definitions for the Boyo translator

use std::fmt;
use std::mem;
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Binary operators usable in prefix expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
}

impl BinOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
        }
    }

    /// Name of the elementwise helper the generated program calls for this operator.
    pub fn helper(self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Sub => "subtract",
            BinOp::Mul => "multiply",
        }
    }
}

/// Rejected hex literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid hex literal: {text}")]
pub struct HexLiteralError {
    pub text: String,
}

/// A validated `0x`-prefixed literal with at least one hex digit.
///
/// The spelling is kept so that the textual form round-trips exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexLiteral(String);

impl HexLiteral {
    pub const PREFIX: &'static str = "0x";

    pub fn new(text: impl Into<String>) -> Result<Self, HexLiteralError> {
        let text = text.into();
        let valid = match text.strip_prefix(Self::PREFIX) {
            Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()),
            None => false,
        };
        if valid {
            Ok(HexLiteral(text))
        } else {
            Err(HexLiteralError { text })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits after the `0x` prefix.
    pub fn digits(&self) -> &str {
        &self.0[Self::PREFIX.len()..]
    }

    /// Byte values, most significant first. An odd digit count is padded with a
    /// leading zero nibble.
    pub fn bytes(&self) -> Vec<u8> {
        let mut nibbles: Vec<u8> = self
            .digits()
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| d as u8)
            .collect();
        if nibbles.len() % 2 == 1 {
            nibbles.insert(0, 0);
        }
        nibbles
            .chunks(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect()
    }
}

impl fmt::Display for HexLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expression nodes
/// Expression tree.
///
/// Operator chains can be arbitrarily deep, so everything that walks a tree
/// (display, lowering, drop) keeps its own work stack instead of recursing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    HexLiteral(HexLiteral),
    Identifier(String),
    Parameter(String),
    Operator {
        op: BinOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Only produced when lifting a keyword token (e.g. a `print` payload).
    Keyword(String),
    /// Unclassified text inside a `print` payload, echoed as written.
    Text(String),
}

impl Expression {
    pub fn operator(op: BinOp, left: Expression, right: Expression) -> Self {
        Expression::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl fmt::Display for Expression {
    /// Prefix (Polish) notation, the same form the source uses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![self];
        let mut first = true;

        while let Some(node) = pending.pop() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;

            match node {
                Expression::HexLiteral(hex) => write!(f, "{}", hex)?,
                Expression::Identifier(name)
                | Expression::Parameter(name)
                | Expression::Keyword(name)
                | Expression::Text(name) => f.write_str(name)?,
                Expression::Operator { op, left, right } => {
                    f.write_str(op.symbol())?;
                    pending.push(right);
                    pending.push(left);
                }
            }
        }
        Ok(())
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        // Detach children so each Box is freed with an empty leaf inside
        let mut detached = Vec::new();
        if let Expression::Operator { left, right, .. } = self {
            detached.push(mem::replace(&mut **left, Expression::Text(String::new())));
            detached.push(mem::replace(&mut **right, Expression::Text(String::new())));
        }
        while let Some(mut node) = detached.pop() {
            if let Expression::Operator { left, right, .. } = &mut node {
                detached.push(mem::replace(&mut **left, Expression::Text(String::new())));
                detached.push(mem::replace(&mut **right, Expression::Text(String::new())));
            }
        }
    }
}

/// Statement nodes, one per source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let NAME EXPR`
    Let {
        name: String,
        value: Expression,
        location: SourceLocation,
    },
    /// `def NAME _p* => EXPR`
    Def {
        name: String,
        params: Vec<String>,
        body: Expression,
        location: SourceLocation,
    },
    /// `main FUNC ARG*`
    Main {
        function: String,
        args: Vec<String>,
        location: SourceLocation,
    },
    /// `// TEXT`
    Comment {
        text: String,
        location: SourceLocation,
    },
    /// `print TOKEN+`, echoed literally
    Print {
        payload: Vec<Expression>,
        location: SourceLocation,
    },
}

impl Statement {
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::Let { location, .. }
            | Statement::Def { location, .. }
            | Statement::Main { location, .. }
            | Statement::Comment { location, .. }
            | Statement::Print { location, .. } => *location,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Let { .. } => "LetStatement",
            Statement::Def { .. } => "DefStatement",
            Statement::Main { .. } => "MainStatement",
            Statement::Comment { .. } => "CommentStatement",
            Statement::Print { .. } => "PrintStatement",
        }
    }

    /// Whether the statement executes at program start rather than declaring something.
    pub fn is_executable(&self) -> bool {
        matches!(self, Statement::Main { .. } | Statement::Print { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_literal_accepts_valid_forms() {
        for text in ["0x0", "0x10", "0xff", "0xDEADBEEF", "0x123"] {
            let hex = HexLiteral::new(text).unwrap();
            assert_eq!(hex.to_string(), text);
        }
    }

    #[test]
    fn test_hex_literal_rejects_malformed() {
        for text in ["1234", "0", "0x", "x", "0xZZ", "0X10", ""] {
            let err = HexLiteral::new(text).unwrap_err();
            assert_eq!(err.text, text);
        }
    }

    #[test]
    fn test_hex_literal_bytes() {
        assert_eq!(HexLiteral::new("0x10").unwrap().bytes(), vec![0x10]);
        assert_eq!(
            HexLiteral::new("0xDEADBEEF").unwrap().bytes(),
            vec![0xDE, 0xAD, 0xBE, 0xEF]
        );
        assert_eq!(HexLiteral::new("0x123").unwrap().bytes(), vec![0x01, 0x23]);
        assert_eq!(HexLiteral::new("0xa").unwrap().bytes(), vec![0x0A]);
    }

    #[test]
    fn test_operator_display_is_prefix() {
        let expr = Expression::operator(
            BinOp::Mul,
            Expression::operator(
                BinOp::Add,
                Expression::HexLiteral(HexLiteral::new("0x01").unwrap()),
                Expression::HexLiteral(HexLiteral::new("0x02").unwrap()),
            ),
            Expression::Parameter("_a".to_string()),
        );
        assert_eq!(expr.to_string(), "* + 0x01 0x02 _a");
    }

    #[test]
    fn test_deep_tree_displays_and_drops() {
        let depth = 100_000;
        let mut expr = Expression::Parameter("_a".to_string());
        for _ in 0..depth {
            expr = Expression::operator(
                BinOp::Sub,
                expr,
                Expression::HexLiteral(HexLiteral::new("0x01").unwrap()),
            );
        }

        let text = expr.to_string();
        assert!(text.starts_with("- - - "));
        assert!(text.ends_with("_a 0x01 0x01"));
        assert_eq!(text.split(' ').count(), 2 * depth + 1);
        drop(expr);
    }

    #[test]
    fn test_binop_symbols_and_helpers() {
        for symbol in ["+", "-", "*"] {
            let op = BinOp::from_symbol(symbol).unwrap();
            assert_eq!(op.symbol(), symbol);
        }
        assert_eq!(BinOp::from_symbol("/"), None);
        assert_eq!(BinOp::Add.helper(), "add");
        assert_eq!(BinOp::Sub.helper(), "subtract");
        assert_eq!(BinOp::Mul.helper(), "multiply");
    }
}
