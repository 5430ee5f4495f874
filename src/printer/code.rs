//! Generated code pretty printer

use crossterm::style::Stylize;
use log::warn;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

const TITLE: &str = "=== Generated C++ Code ===";

/// Prints C++ source, formatted by an external formatter when one is available
pub struct CodePrinter {
    pub use_color: bool,
    /// Formatter program followed by its arguments. It reads stdin and writes stdout.
    pub formatter: Vec<String>,
}

impl Default for CodePrinter {
    fn default() -> Self {
        Self {
            use_color: true,
            formatter: vec!["clang-format".to_string(), "--style=Google".to_string()],
        }
    }
}

impl CodePrinter {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            ..Self::default()
        }
    }

    /// Run the formatter over `code`. `None` if it is missing or fails.
    pub fn format(&self, code: &str) -> Option<String> {
        let (program, args) = self.formatter.split_first()?;

        let mut child = match Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!("{} unavailable: {}", program, e);
                return None;
            }
        };

        // Feed stdin from another thread so a full stdout pipe cannot stall us
        let mut stdin = child.stdin.take()?;
        let input = code.to_string();
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output().ok()?;
        let written = writer.join().ok()?;
        if written.is_err() || !output.status.success() {
            warn!("{} failed, falling back to basic formatting", program);
            return None;
        }
        String::from_utf8(output.stdout).ok()
    }

    /// The full report: title, code, and a note on how it was formatted.
    ///
    /// Returns the text and whether the external formatter was used.
    pub fn render(&self, code: &str) -> (String, bool) {
        let mut out = String::new();
        if self.use_color {
            out.push_str(&format!("{}\n\n", TITLE.cyan()));
        } else {
            out.push_str(&format!("{}\n\n", TITLE));
        }

        let formatted = self.format(code);
        let used_formatter = formatted.is_some();
        let footer = match formatted {
            Some(formatted) => {
                out.push_str(&formatted);
                if !formatted.ends_with('\n') {
                    out.push('\n');
                }
                "(formatted with clang-format)"
            }
            None => {
                out.push_str(&self.render_numbered(code));
                "(basic formatting)"
            }
        };

        if self.use_color {
            let footer = if used_formatter {
                footer.green()
            } else {
                footer.yellow()
            };
            out.push_str(&format!("{}\n", footer));
        } else {
            out.push_str(footer);
            out.push('\n');
        }

        (out, used_formatter)
    }

    /// Plain rendering with a line number gutter.
    pub fn render_numbered(&self, code: &str) -> String {
        let mut out = String::new();
        for (index, line) in code.lines().enumerate() {
            let gutter = format!("{:>4} | ", index + 1);
            if self.use_color {
                out.push_str(&format!("{}{}\n", gutter.blue(), line));
            } else {
                out.push_str(&format!("{}{}\n", gutter, line));
            }
        }
        out
    }

    /// Print the report to stdout.
    pub fn print(&self, code: &str) -> io::Result<bool> {
        let (text, used_formatter) = self.render(code);
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(used_formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain_printer() -> CodePrinter {
        CodePrinter {
            use_color: false,
            formatter: vec!["boyo-no-such-formatter".to_string()],
        }
    }

    #[test]
    fn test_numbered_lines() {
        let printer = plain_printer();

        assert_eq!(
            printer.render_numbered("int x;\nint y;\n"),
            "   1 | int x;\n   2 | int y;\n"
        );
    }

    #[test]
    fn test_falls_back_without_formatter() {
        let printer = plain_printer();
        let (text, used_formatter) = printer.render("int main() {}\n");

        assert!(!used_formatter);
        assert_eq!(
            text,
            "=== Generated C++ Code ===\n\n   1 | int main() {}\n(basic formatting)\n"
        );
    }

    #[test]
    fn test_empty_formatter_command() {
        let printer = CodePrinter {
            use_color: false,
            formatter: Vec::new(),
        };

        assert_eq!(printer.format("int x;"), None);
        assert!(!printer.render("int x;").1);
    }

    #[test]
    fn test_colored_gutter_keeps_code() {
        let printer = CodePrinter {
            use_color: true,
            ..plain_printer()
        };
        let text = printer.render_numbered("return 0;");

        assert!(text.contains("   1 | "));
        assert!(text.ends_with("return 0;\n"));
    }
}
