//! toyc
//!
//! A line-at-a-time compiler pipeline for a tiny language of `print`
//! statements and integer declarations. Each line is tokenized, checked for
//! superficial well-formedness and then interpreted against a symbol table,
//! producing a human-readable description instead of machine code.

pub mod codegen;
pub mod lexer;
pub mod pipeline;
pub mod session;
pub mod symbol;
pub mod syntax;

pub use codegen::{CodeGenerator, CodegenError, DeclType, Generated};
pub use lexer::{tokenize, Keyword, Scanner, Token, TokenKind};
pub use pipeline::{CompileError, Compiler, LineReport, PipelineStage, Tokenizer};
pub use session::{collect_lines, InputMode, RunSummary, Session, SessionConfig};
pub use symbol::SymbolTable;
pub use syntax::{SyntaxChecker, SyntaxError};
