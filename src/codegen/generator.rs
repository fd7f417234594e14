use regex::{Captures, Regex};
use tracing::debug;

use crate::codegen::{CodegenError, DeclType, Generated};
use crate::lexer::Keyword;
use crate::symbol::SymbolTable;

const DECLARATION_PATTERN: &str =
    r"^\s*(int|float)\s+([A-Za-z_][A-Za-z0-9_]*)\s*=\s*([0-9]+)\s*;\s*$";

/// Interprets a validated line against the symbol table.
///
/// The line is classified from its raw text rather than from the token
/// stream: the tokenizer does not produce integer literals, so declarations
/// can only be read back from the source itself.
pub struct CodeGenerator {
    declaration: Regex,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: Regex::new(DECLARATION_PATTERN).expect("declaration pattern is valid"),
        }
    }

    /// Generate the description of a single line
    /// # Errors
    /// Returns a `CodegenError` runtime notice when a `print` is malformed or
    /// names an unknown variable, or a declared literal does not fit an `i32`.
    /// The symbol table is left untouched in every error case.
    pub fn generate(&self, line: &str, table: &mut SymbolTable) -> Result<Generated, CodegenError> {
        if line.contains(Keyword::Print.as_str()) {
            return self.generate_print(line, table);
        }

        if let Some(caps) = self.declaration.captures(line) {
            return self.generate_declaration(&caps, table);
        }

        // Anything else is a no-op statement
        let stmt = line.strip_suffix(';').unwrap_or(line);
        debug!(stmt, "generic statement");
        Ok(Generated::Statement(stmt.to_string()))
    }

    fn generate_print(&self, line: &str, table: &SymbolTable) -> Result<Generated, CodegenError> {
        let open = line.find('(').ok_or(CodegenError::MalformedPrint)?;
        let args = &line[open + 1..];
        let close = args.find(')').ok_or(CodegenError::UnclosedPrint)?;
        let payload = &args[..close];

        let trimmed = payload.trim_matches(' ');
        if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
            let text = &trimmed[1..trimmed.len() - 1];
            debug!(text, "print string literal");
            return Ok(Generated::Text(text.to_string()));
        }

        let name: String = payload.chars().filter(|&ch| ch != ' ').collect();
        if name.is_empty() {
            return Err(CodegenError::EmptyPrint);
        }

        match table.get(&name) {
            Some(value) => {
                debug!(%name, value, "print variable");
                Ok(Generated::Value { name, value })
            }
            None => Err(CodegenError::UndefinedVariable(name)),
        }
    }

    fn generate_declaration(
        &self,
        caps: &Captures<'_>,
        table: &mut SymbolTable,
    ) -> Result<Generated, CodegenError> {
        let ty = DeclType::from_str(&caps[1]).unwrap_or(DeclType::Int);
        let name = caps[2].to_string();
        let digits = &caps[3];
        let value: i32 = digits
            .parse()
            .map_err(|_| CodegenError::IntegerOverflow(digits.to_string()))?;

        if let Some(previous) = table.set(name.clone(), value) {
            debug!(%name, previous, value, "redeclared variable");
        } else {
            debug!(%name, %ty, value, "declared variable");
        }

        Ok(Generated::Assignment { ty, name, value })
    }
}
