use crate::lexer::Keyword;
use crate::syntax::SyntaxError;
use tracing::debug;

/// Coarse, presence-based well-formedness check over a raw source line.
///
/// A line mentioning `print` only needs a `;`, a `(` and a `)` somewhere in
/// it; their order and balance are not inspected. Every other line must end
/// in `;`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntaxChecker;

impl SyntaxChecker {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` when the line passes validation.
    #[must_use]
    pub fn validate(&self, line: &str) -> bool {
        self.check(line).is_ok()
    }

    /// Validate a line, reporting why it was rejected
    /// # Errors
    /// `SyntaxError::EmptyLine` for empty or whitespace-only input,
    /// `SyntaxError::InvalidStatement` when the rules above fail
    pub fn check(&self, line: &str) -> Result<(), SyntaxError> {
        if line.trim().is_empty() {
            debug!("rejected empty line");
            return Err(SyntaxError::EmptyLine);
        }

        let valid = if line.contains(Keyword::Print.as_str()) {
            line.contains(';') && line.contains('(') && line.contains(')')
        } else {
            line.ends_with(';')
        };

        debug!(valid, "validated line");
        if valid {
            Ok(())
        } else {
            Err(SyntaxError::InvalidStatement)
        }
    }
}
