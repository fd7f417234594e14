pub mod checker;
pub mod errors;

pub use checker::*;
pub use errors::*;
