//! Statement parsing implementation
//!
//! A line is dispatched on its first token:
//!
//! - `let NAME EXPR`
//! - `def NAME _param* => EXPR`
//! - `main FUNC ARG*`
//! - `print TOKEN+`
//!
//! Comment lines never reach this module; [`parse`](super::parse::parse) turns
//! them into [`Statement::Comment`] directly.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse the whole line as one statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let statement = match self.peek().kind {
            TokenKind::Let => self.parse_let()?,
            TokenKind::Def => self.parse_def()?,
            TokenKind::Main => self.parse_main()?,
            TokenKind::Print => self.parse_print()?,
            TokenKind::Eof => return Err(self.error("Expected a statement")),
            _ => {
                let token = self.peek();
                return Err(self.error(format!("Unknown statement type: {}", token.text)));
            }
        };
        Ok(statement)
    }

    /// Parse `let NAME EXPR`
    fn parse_let(&mut self) -> Result<Statement, ParseError> {
        let location = self.advance().location;

        let name = self.expect_identifier("let statement requires identifier after 'let'")?;

        if self.is_at_end() {
            return Err(self.error(format!("let statement requires a value for '{}'", name)));
        }
        let value = self.parse_prefix_expression()?;
        self.expect_end("let")?;

        Ok(Statement::Let {
            name,
            value,
            location,
        })
    }

    /// Parse `def NAME _param* => EXPR`
    fn parse_def(&mut self) -> Result<Statement, ParseError> {
        let location = self.advance().location;

        let name = self.expect_identifier("def statement requires function name after 'def'")?;

        let mut params = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::Param => params.push(self.advance().text),
                TokenKind::Arrow => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    return Err(self.error("def statement requires '=>' before body"));
                }
                _ => {
                    return Err(self.error(format!(
                        "Expected parameter or '=>' in def statement, found {}",
                        self.peek()
                    )));
                }
            }
        }

        if self.is_at_end() {
            return Err(self.error(format!("def statement '{}' requires a body after '=>'", name)));
        }
        let body = self.parse_prefix_expression()?;
        self.expect_end("def")?;

        Ok(Statement::Def {
            name,
            params,
            body,
            location,
        })
    }

    /// Parse `main FUNC ARG*`
    fn parse_main(&mut self) -> Result<Statement, ParseError> {
        let location = self.advance().location;

        let function = self.expect_identifier("main statement requires function name after 'main'")?;

        let mut args = Vec::new();
        while !self.is_at_end() {
            args.push(self.expect_identifier("Expected identifier in main statement arguments")?);
        }

        Ok(Statement::Main {
            function,
            args,
            location,
        })
    }

    /// Parse `print TOKEN+`; every payload token is lifted on its own and
    /// unclassified text is kept as written.
    fn parse_print(&mut self) -> Result<Statement, ParseError> {
        let location = self.advance().location;

        if self.is_at_end() {
            return Err(self.error("print statement requires something to print"));
        }

        let mut payload = Vec::new();
        while !self.is_at_end() {
            let token = self.advance();
            payload.push(super::expressions::lift_print_token(&token)?);
        }

        Ok(Statement::Print { payload, location })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::parse;

    fn hex(text: &str) -> Expression {
        Expression::HexLiteral(HexLiteral::new(text).unwrap())
    }

    #[test]
    fn test_parse_let_statement() {
        let statements = parse(&["let A 0x10"]).unwrap();

        assert_eq!(
            statements,
            vec![Statement::Let {
                name: "A".to_string(),
                value: hex("0x10"),
                location: SourceLocation::new(1, 1),
            }]
        );
    }

    #[test]
    fn test_parse_let_errors() {
        let err = parse(&["let A"]).unwrap_err();
        assert!(err.message.contains("requires a value"), "{}", err);

        let err = parse(&["let 0x10"]).unwrap_err();
        assert!(err.message.contains("identifier after 'let'"), "{}", err);
        assert!(err.message.contains("0x10"), "{}", err);

        let err = parse(&["let A 0x10 0x20"]).unwrap_err();
        assert!(err.message.contains("after let statement"), "{}", err);
    }

    #[test]
    fn test_parse_def_statement() {
        let statements = parse(&["def double _a => * 0x10 _a"]).unwrap();

        match &statements[0] {
            Statement::Def {
                name, params, body, ..
            } => {
                assert_eq!(name, "double");
                assert_eq!(params, &vec!["_a".to_string()]);
                assert_eq!(
                    *body,
                    Expression::operator(BinOp::Mul, hex("0x10"), Expression::Parameter("_a".into()))
                );
            }
            other => panic!("Expected def statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_def_without_params() {
        let statements = parse(&["def get_value => 0x42"]).unwrap();

        assert!(matches!(
            &statements[0],
            Statement::Def { params, .. } if params.is_empty()
        ));
    }

    #[test]
    fn test_parse_def_errors() {
        let err = parse(&["def double _a 0x10"]).unwrap_err();
        assert!(err.message.contains("Expected parameter or '=>'"), "{}", err);

        let err = parse(&["def double _a"]).unwrap_err();
        assert!(err.message.contains("requires '=>'"), "{}", err);

        let err = parse(&["def double _a =>"]).unwrap_err();
        assert!(err.message.contains("requires a body"), "{}", err);

        let err = parse(&["def _a => _a"]).unwrap_err();
        assert!(err.message.contains("function name"), "{}", err);
    }

    #[test]
    fn test_parse_main_statement() {
        let statements = parse(&["main add A B"]).unwrap();

        assert_eq!(
            statements,
            vec![Statement::Main {
                function: "add".to_string(),
                args: vec!["A".to_string(), "B".to_string()],
                location: SourceLocation::new(1, 1),
            }]
        );
    }

    #[test]
    fn test_parse_main_errors() {
        let err = parse(&["main"]).unwrap_err();
        assert!(err.message.contains("function name"), "{}", err);

        let err = parse(&["main double 0x10"]).unwrap_err();
        assert!(err.message.contains("arguments"), "{}", err);
        assert_eq!(err.location.column, 13);
    }

    #[test]
    fn test_parse_print_statement() {
        let statements = parse(&["print hello 0x41 let"]).unwrap();

        assert_eq!(
            statements,
            vec![Statement::Print {
                payload: vec![
                    Expression::Identifier("hello".to_string()),
                    hex("0x41"),
                    Expression::Keyword("let".to_string()),
                ],
                location: SourceLocation::new(1, 1),
            }]
        );

        assert!(parse(&["print"]).is_err());
        assert!(parse(&["print + A"]).is_err());
    }

    #[test]
    fn test_parse_print_keeps_raw_text() {
        let statements = parse(&["print done! a-b"]).unwrap();

        assert_eq!(
            statements[0],
            Statement::Print {
                payload: vec![
                    Expression::Text("done!".to_string()),
                    Expression::Text("a-b".to_string()),
                ],
                location: SourceLocation::new(1, 1),
            }
        );
    }

    #[test]
    fn test_unknown_statement_keyword() {
        let err = parse(&["show A"]).unwrap_err();

        assert_eq!(err.message, "Unknown statement type: show");
    }

    #[test]
    fn test_no_partial_results() {
        let result = parse(&["let A 0x10", "def f _a => _a", "main"]);

        assert!(result.is_err());
    }
}
