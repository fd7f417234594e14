use thiserror::Error;

use crate::codegen::CodegenError;
use crate::syntax::SyntaxError;

/// Per-line compilation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Runtime(#[from] CodegenError),
}
