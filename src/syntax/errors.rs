use thiserror::Error;

/// Syntax validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Syntax Error: Invalid statement detected!")]
    InvalidStatement,

    #[error("Syntax Error: empty statement")]
    EmptyLine,
}
