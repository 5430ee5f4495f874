//! C++ code generation
//!
//! Every statement lowers to a self-contained snippet of C++. The snippets are
//! partitioned into two regions of a [`GeneratedProgram`]:
//!
//! - **global**: declarations, functions and comments, placed before `main()`
//! - **entry**: executable statements (`main`, `print`), placed inside `main()`
//!
//! Both regions keep source order. [`template::render_program`] splices them
//! into the fixed program that defines the elementwise helpers.
//!
//! Generation is a pure function of the statements; it either produces both
//! regions or fails with the first [`GenerateError`].

pub mod template;

use crate::parser::ast::{Expression, HexLiteral, SourceLocation, Statement};
use log::debug;
use thiserror::Error;

/// C++ type used for every Boyo value.
pub const BYTES_TYPE: &str = "std::vector<uint8_t>";

/// Name the entry region binds each `main` call result to.
pub const RESULT_BINDING: &str = "result";

/// Errors raised while lowering statements to C++
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// `let` bound to something other than a hex literal
    #[error("Generation error at {location}: let '{name}' must be initialized with a hex literal, found '{expression}'")]
    NonLiteralInitializer {
        name: String,
        expression: String,
        location: SourceLocation,
    },

    /// A keyword expression reached a place that needs a value
    #[error("Generation error at {location}: keyword '{keyword}' cannot be used as a value")]
    UnexpectedKeyword {
        keyword: String,
        location: SourceLocation,
    },

    /// Raw `print` text reached a place that needs a value
    #[error("Generation error at {location}: '{text}' cannot be used as a value")]
    UnexpectedText {
        text: String,
        location: SourceLocation,
    },

    /// `print` with nothing to print
    #[error("Generation error at {location}: print statement has no payload")]
    EmptyPrint { location: SourceLocation },
}

/// Which part of the program template a statement lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Global,
    Entry,
}

impl Region {
    pub fn of(statement: &Statement) -> Self {
        if statement.is_executable() {
            Region::Entry
        } else {
            Region::Global
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Global => "global",
            Region::Entry => "entry",
        }
    }
}

/// Generated C++, split by region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedProgram {
    pub global: String,
    pub entry: String,
}

/// Lower all statements, in order, into their regions.
pub fn generate(statements: &[Statement]) -> Result<GeneratedProgram, GenerateError> {
    let mut program = GeneratedProgram::default();

    for statement in statements {
        let code = generate_statement(statement)?;
        match Region::of(statement) {
            Region::Global => program.global.push_str(&code),
            Region::Entry => program.entry.push_str(&code),
        }
    }

    debug!(
        "generated {} bytes of global code and {} bytes of entry code",
        program.global.len(),
        program.entry.len()
    );
    Ok(program)
}

/// Lower a single statement. The result always ends with a newline.
pub fn generate_statement(statement: &Statement) -> Result<String, GenerateError> {
    match statement {
        Statement::Comment { text, .. } => Ok(format!("// {}\n", text)),

        Statement::Let {
            name,
            value,
            location,
        } => match value {
            Expression::HexLiteral(hex) => {
                Ok(format!("{} {} = {};\n", BYTES_TYPE, name, byte_list(hex)))
            }
            other => Err(GenerateError::NonLiteralInitializer {
                name: name.clone(),
                expression: other.to_string(),
                location: *location,
            }),
        },

        Statement::Def {
            name,
            params,
            body,
            location,
        } => {
            let params = params
                .iter()
                .map(|p| format!("const {}& {}", BYTES_TYPE, p))
                .collect::<Vec<_>>()
                .join(", ");
            let body = generate_expression(body, *location)?;
            Ok(format!(
                "{} {}({}) {{\n  return {};\n}}\n",
                BYTES_TYPE, name, params, body
            ))
        }

        Statement::Main { function, args, .. } => Ok(format!(
            "{{\n  auto {result} = {}({});\n  print_vector(std::cout, {result});\n}}\n",
            function,
            args.join(", "),
            result = RESULT_BINDING,
        )),

        Statement::Print { payload, location } => {
            if payload.is_empty() {
                return Err(GenerateError::EmptyPrint {
                    location: *location,
                });
            }
            let text = payload
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            Ok(format!("std::cout << \"{}\" << std::endl;\n", escape_string(&text)))
        }
    }
}

/// Pending work while lowering an expression.
enum Emit<'a> {
    Node(&'a Expression),
    Text(&'static str),
}

/// Lower an expression tree to a C++ expression.
///
/// `location` is the owning statement's, used for diagnostics. The tree is
/// walked with an explicit stack and written into a single buffer.
pub fn generate_expression(
    expression: &Expression,
    location: SourceLocation,
) -> Result<String, GenerateError> {
    let mut out = String::new();
    let mut work = vec![Emit::Node(expression)];

    while let Some(item) = work.pop() {
        let node = match item {
            Emit::Text(text) => {
                out.push_str(text);
                continue;
            }
            Emit::Node(node) => node,
        };

        match node {
            Expression::HexLiteral(hex) => out.push_str(&byte_list(hex)),
            Expression::Identifier(name) | Expression::Parameter(name) => out.push_str(name),
            Expression::Operator { op, left, right } => {
                out.push_str(op.helper());
                out.push('(');
                work.push(Emit::Text(")"));
                work.push(Emit::Node(right));
                work.push(Emit::Text(", "));
                work.push(Emit::Node(left));
            }
            Expression::Keyword(keyword) => {
                return Err(GenerateError::UnexpectedKeyword {
                    keyword: keyword.clone(),
                    location,
                })
            }
            Expression::Text(text) => {
                return Err(GenerateError::UnexpectedText {
                    text: text.clone(),
                    location,
                })
            }
        }
    }

    Ok(out)
}

/// Brace-initializer for the bytes of a literal, e.g. `{0xDE, 0xAD}`.
pub fn byte_list(hex: &HexLiteral) -> String {
    let bytes = hex
        .bytes()
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", bytes)
}

/// Escape text for a C++ string literal.
pub fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
