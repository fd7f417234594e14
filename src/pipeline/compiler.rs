use tracing::{debug, debug_span, warn};

use crate::codegen::CodeGenerator;
use crate::pipeline::{CompileError, LineReport, PipelineStage, Tokenizer};
use crate::symbol::SymbolTable;
use crate::syntax::SyntaxChecker;

/// Runs each line through tokenization, validation and code generation.
///
/// Owns the symbol table for the whole run; it is the only state carried from
/// one line to the next.
#[derive(Default)]
pub struct Compiler {
    tokenizer: Tokenizer,
    checker: SyntaxChecker,
    generator: CodeGenerator,
    symbols: SymbolTable,
}

impl Compiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Compile one source line. Errors are captured in the report, never
    /// propagated, so a bad line cannot stop the lines after it.
    pub fn compile_line(&mut self, line: &str) -> LineReport {
        let tokens = match run_stage(&self.tokenizer, line) {
            Ok(tokens) => tokens,
            Err(never) => match never {},
        };

        let outcome = run_stage(&self.checker, line)
            .map_err(CompileError::from)
            .and_then(|()| {
                self.generator
                    .generate(line, &mut self.symbols)
                    .map_err(CompileError::from)
            });

        match &outcome {
            Ok(generated) => debug!(%generated, "line compiled"),
            Err(err) => warn!(%err, line, "line failed"),
        }

        LineReport::new(line, tokens, outcome)
    }
}

fn run_stage<S: PipelineStage>(stage: &S, line: &str) -> Result<S::Output, S::Error> {
    let _span = debug_span!("stage", name = stage.name()).entered();
    stage.process(line)
}
