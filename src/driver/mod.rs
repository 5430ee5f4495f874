//! Compilation driver
//!
//! Glue between the translation pipeline and the outside world: reading source
//! files, rendering the full C++ program, and handing it to an external C++
//! toolchain. None of this takes part in translation itself.

use crate::codegen::{self, template, GenerateError, GeneratedProgram};
use crate::parser::{self, ParseError, Statement};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Compiler used when none is configured.
pub const DEFAULT_COMPILER: &str = "g++";

/// Language standard passed to the toolchain.
pub const DEFAULT_STANDARD: &str = "c++17";

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Failed to execute compiler command '{}': {source}", compiler.display())]
    ToolchainLaunch { compiler: PathBuf, source: io::Error },

    #[error("Failed to compile program: {}", output.display())]
    ToolchainFailed {
        output: PathBuf,
        status: Option<i32>,
        diagnostics: String,
    },
}

/// External C++ toolchain settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub compiler: PathBuf,
    pub standard: String,
    /// Keep the intermediate `.cpp` file after compiling.
    pub keep_source: bool,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            compiler: PathBuf::from(DEFAULT_COMPILER),
            standard: DEFAULT_STANDARD.to_string(),
            keep_source: false,
        }
    }
}

impl Toolchain {
    /// Command line that builds `output` from `source`.
    pub fn command(&self, source: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.compiler);
        command
            .arg(format!("-std={}", self.standard))
            .arg("-o")
            .arg(output)
            .arg(source);
        command
    }
}

/// Read a source file as lines.
pub fn read_source(path: &Path) -> Result<Vec<String>, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Parse and generate in one step.
pub fn translate<S: AsRef<str>>(lines: &[S]) -> Result<GeneratedProgram, DriverError> {
    let statements: Vec<Statement> = parser::parse(lines)?;
    Ok(codegen::generate(&statements)?)
}

/// Translate and render the complete C++ translation unit.
pub fn render_source<S: AsRef<str>>(lines: &[S]) -> Result<String, DriverError> {
    Ok(template::render_program(&translate(lines)?))
}

/// Where the intermediate C++ file for `output` is written.
pub fn intermediate_path(output: &Path) -> PathBuf {
    let mut path = output.as_os_str().to_owned();
    path.push(".cpp");
    PathBuf::from(path)
}

/// Compile Boyo source lines into a native executable at `output`.
pub fn compile<S: AsRef<str>>(
    lines: &[S],
    output: &Path,
    toolchain: &Toolchain,
) -> Result<(), DriverError> {
    let source = render_source(lines)?;

    let cpp_path = intermediate_path(output);
    fs::write(&cpp_path, &source).map_err(|source| DriverError::Write {
        path: cpp_path.clone(),
        source,
    })?;
    info!("wrote {} ({} bytes)", cpp_path.display(), source.len());

    let mut command = toolchain.command(&cpp_path, output);
    info!("running {:?}", command);
    let result = command.output();

    if !toolchain.keep_source {
        if let Err(e) = fs::remove_file(&cpp_path) {
            debug!("could not remove {}: {}", cpp_path.display(), e);
        }
    }

    let result = result.map_err(|source| DriverError::ToolchainLaunch {
        compiler: toolchain.compiler.clone(),
        source,
    })?;

    if !result.status.success() {
        let mut diagnostics = String::from_utf8_lossy(&result.stdout).into_owned();
        diagnostics.push_str(&String::from_utf8_lossy(&result.stderr));
        return Err(DriverError::ToolchainFailed {
            output: output.to_path_buf(),
            status: result.status.code(),
            diagnostics,
        });
    }

    info!("compiled {}", output.display());
    Ok(())
}

/// Toolchain output with every line prefixed by `| `.
pub fn format_diagnostics(diagnostics: &str) -> String {
    diagnostics
        .lines()
        .map(|line| format!("| {}\n", line))
        .collect()
}
