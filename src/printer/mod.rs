//! Human-readable output for the command line
//!
//! - [`code`]: pretty-printing generated C++ (through `clang-format` when it is
//!   installed, numbered lines otherwise)
//! - [`ast`]: the statement tree report behind `--print-ast`

pub mod ast;
pub mod code;

pub use ast::{render_program_tree, statement_tree};
pub use code::CodePrinter;
