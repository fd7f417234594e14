use std::io::{self, Write};

use crate::codegen::Generated;
use crate::lexer::Token;
use crate::pipeline::CompileError;

/// Everything the pipeline produced for one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    pub line: String,
    pub tokens: Vec<Token>,
    pub outcome: Result<Generated, CompileError>,
}

impl LineReport {
    pub fn new(line: &str, tokens: Vec<Token>, outcome: Result<Generated, CompileError>) -> Self {
        Self {
            line: line.to_string(),
            tokens,
            outcome,
        }
    }

    /// Write the lexical, syntax and code generation reports.
    ///
    /// Progress and successful output go to `out`; syntax errors and runtime
    /// notices go to `err`.
    pub fn write_to<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> io::Result<()> {
        writeln!(out, "Performing Lexical Analysis...")?;
        write!(out, "Tokens Identified: ")?;
        for token in &self.tokens {
            write!(out, "{token} ")?;
        }
        writeln!(out)?;

        writeln!(out, "Validating Syntax...")?;
        if let Err(CompileError::Syntax(e)) = &self.outcome {
            out.flush()?;
            writeln!(err, "Compilation Error: {e}")?;
            return Ok(());
        }
        writeln!(out, "Syntax is Valid!")?;

        writeln!(out, "Generating Code...")?;
        match &self.outcome {
            Ok(generated) => writeln!(out, "Compiled Output: {generated}"),
            Err(e) => {
                out.flush()?;
                writeln!(err, "Runtime Error: {e}")
            }
        }
    }
}
