pub mod scanner;
pub mod tokens;

pub use scanner::*;
pub use tokens::*;
