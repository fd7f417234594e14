pub mod compiler;
pub mod errors;
pub mod report;
pub mod stage;

pub use compiler::*;
pub use errors::*;
pub use report::*;
pub use stage::*;
