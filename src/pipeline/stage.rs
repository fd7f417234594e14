use std::convert::Infallible;

use crate::lexer::{tokenize, Token};
use crate::syntax::{SyntaxChecker, SyntaxError};

/// A front-end pass that inspects one raw source line.
pub trait PipelineStage {
    type Output;
    type Error;

    /// Short name used in log spans
    fn name(&self) -> &'static str;

    fn process(&self, line: &str) -> Result<Self::Output, Self::Error>;
}

/// Lexical analysis stage
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl PipelineStage for Tokenizer {
    type Output = Vec<Token>;
    type Error = Infallible;

    fn name(&self) -> &'static str {
        "lexical-analysis"
    }

    fn process(&self, line: &str) -> Result<Vec<Token>, Infallible> {
        Ok(tokenize(line))
    }
}

impl PipelineStage for SyntaxChecker {
    type Output = ();
    type Error = SyntaxError;

    fn name(&self) -> &'static str {
        "syntax-validation"
    }

    fn process(&self, line: &str) -> Result<(), SyntaxError> {
        self.check(line)
    }
}
