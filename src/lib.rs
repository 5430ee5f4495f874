//! # Introduction
//!
//! Boyo translates a tiny byte-arithmetic language into C++ and hands the
//! result to a C++ toolchain. A Boyo program is one statement per line:
//!
//! ```text
//! let A 0x10                   // a named byte sequence
//! def double _a => * 0x02 _a   // a function with a prefix-notation body
//! main double A                // call it at program start and print the result
//! ```
//!
//! ## Translation pipeline
//!
//! ```text
//! Lines → Lexer → Parser → Statements → Generator → (global, entry) → Template
//! ```
//!
//! 1. [`parser`]: tokenises each line and builds one [`parser::Statement`] per line.
//! 2. [`codegen`]: lowers statements to C++ and splits the output into a
//!    [`codegen::GeneratedProgram`] with separate global and entry regions.
//! 3. [`codegen::template`]: splices both regions into the fixed program that
//!    defines the elementwise `add`/`subtract`/`multiply` helpers.
//!
//! Around the pipeline:
//!
//! - [`driver`]: reads source files and invokes the external C++ compiler
//! - [`printer`]: `--print-code` and `--print-ast` reports
//! - [`ui`]: ratatui-based inspector; not part of the stable library API
//!
//! Every stage is a pure function of its input. There is no state shared
//! between calls, and the first error aborts the stage that raised it.

pub mod codegen;
pub mod driver;
pub mod parser;
pub mod printer;
pub mod ui;

pub use codegen::{generate, GenerateError, GeneratedProgram};
pub use parser::{parse, ParseError};
