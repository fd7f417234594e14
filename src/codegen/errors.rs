use thiserror::Error;

/// Code generation error types
///
/// None of these abort a run; they are reported as runtime notices for the
/// line that produced them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("Variable '{0}' is not defined.")]
    UndefinedVariable(String),

    #[error("print statement is missing '('")]
    MalformedPrint,

    #[error("print statement is missing ')' after '('")]
    UnclosedPrint,

    #[error("print statement has nothing to print")]
    EmptyPrint,

    #[error("integer literal '{0}' is out of range")]
    IntegerOverflow(String),
}
