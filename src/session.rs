//! Input collection and the loop over collected lines.
//!
//! Lines are gathered up front, then compiled in order. In multi-line mode
//! collection stops at the sentinel line (which is not compiled) or at end of
//! input; in single-line mode only the first line is read.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::pipeline::{CompileError, Compiler};
use crate::symbol::SymbolTable;

pub const DEFAULT_SENTINEL: &str = "END";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Read until the sentinel line
    #[default]
    MultiLine,
    /// Read and compile exactly one line
    SingleLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: InputMode,
    pub sentinel: String,
    /// Print an input prompt before reading
    pub prompt: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            sentinel: DEFAULT_SENTINEL.to_string(),
            prompt: false,
        }
    }
}

/// Counts gathered over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub compiled: usize,
    pub syntax_errors: usize,
    pub runtime_errors: usize,
}

/// Read source lines according to `config`.
///
/// A trailing `\r` is dropped from every line. In single-line mode an empty
/// input still yields one (empty) line so that it is reported rather than
/// silently ignored.
pub fn collect_lines<R: BufRead>(reader: R, config: &SessionConfig) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }

        if config.mode == InputMode::SingleLine {
            lines.push(line);
            break;
        }
        if line == config.sentinel {
            debug!(sentinel = %config.sentinel, "end of input");
            break;
        }
        lines.push(line);
    }

    if config.mode == InputMode::SingleLine && lines.is_empty() {
        lines.push(String::new());
    }
    Ok(lines)
}

pub struct Session {
    compiler: Compiler,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            compiler: Compiler::new(),
            config,
        }
    }

    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        self.compiler.symbols()
    }

    /// Collect lines from `input` and compile each, writing reports to `out`
    /// and diagnostics to `err`.
    /// # Errors
    /// Only I/O failures; compilation errors are reported and counted.
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> io::Result<RunSummary>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.config.prompt {
            match self.config.mode {
                InputMode::MultiLine => writeln!(
                    out,
                    "Enter your code (type '{}' to finish):",
                    self.config.sentinel
                )?,
                InputMode::SingleLine => writeln!(out, "Enter your code:")?,
            }
            out.flush()?;
        }

        let lines = collect_lines(input, &self.config)?;
        info!(lines = lines.len(), "collected source");

        let mut summary = RunSummary {
            lines: lines.len(),
            ..RunSummary::default()
        };
        for line in &lines {
            let report = self.compiler.compile_line(line);
            match &report.outcome {
                Ok(_) => summary.compiled += 1,
                Err(CompileError::Syntax(_)) => summary.syntax_errors += 1,
                Err(CompileError::Runtime(_)) => summary.runtime_errors += 1,
            }
            report.write_to(out, err)?;
        }
        out.flush()?;
        err.flush()?;

        info!(
            compiled = summary.compiled,
            syntax_errors = summary.syntax_errors,
            runtime_errors = summary.runtime_errors,
            "run finished"
        );
        for (name, value) in self.symbols().entries() {
            debug!(name, value, "final symbol");
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn stops_at_sentinel() {
        let input = Cursor::new("int x = 1;\nEND\nprint(x);\n");
        let lines = collect_lines(input, &SessionConfig::default()).unwrap();
        assert_eq!(lines, ["int x = 1;"]);
    }

    #[test]
    fn sentinel_must_match_exactly() {
        let input = Cursor::new(" END\nend\nEND \nEND\r\n");
        let lines = collect_lines(input, &SessionConfig::default()).unwrap();
        assert_eq!(lines, [" END", "end", "END "]);
    }

    #[test]
    fn eof_without_sentinel_ends_input() {
        let input = Cursor::new("a;\nb;");
        let lines = collect_lines(input, &SessionConfig::default()).unwrap();
        assert_eq!(lines, ["a;", "b;"]);
    }

    #[test]
    fn custom_sentinel() {
        let config = SessionConfig {
            sentinel: "STOP".to_string(),
            ..SessionConfig::default()
        };
        let lines = collect_lines(Cursor::new("END\nSTOP\nx;"), &config).unwrap();
        assert_eq!(lines, ["END"]);
    }

    #[test]
    fn single_line_mode_reads_one_line() {
        let config = SessionConfig {
            mode: InputMode::SingleLine,
            ..SessionConfig::default()
        };
        assert_eq!(collect_lines(Cursor::new("a;\nb;\n"), &config).unwrap(), ["a;"]);
        assert_eq!(collect_lines(Cursor::new(""), &config).unwrap(), [""]);
    }

    #[test]
    fn run_counts_outcomes_and_keeps_going() {
        let mut session = Session::new(SessionConfig::default());
        let input = Cursor::new("foo\nprint(x);\nint x = 4;\nprint(x);\nEND\n");
        let mut out = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let summary = session.run(input, &mut out, &mut err).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                lines: 4,
                compiled: 2,
                syntax_errors: 1,
                runtime_errors: 1,
            }
        );
        assert_eq!(session.symbols().get("x"), Some(4));
        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with("Compiled Output: 4\n"));
        assert!(!out.contains("Enter your code"));
    }

    #[test]
    fn prompt_names_sentinel() {
        let mut session = Session::new(SessionConfig {
            prompt: true,
            ..SessionConfig::default()
        });
        let mut out = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        session.run(Cursor::new("END\n"), &mut out, &mut err).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter your code (type 'END' to finish):\n"
        );
    }
}
