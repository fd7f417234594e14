pub mod errors;
pub mod generator;
pub mod types;

pub use errors::*;
pub use generator::*;
pub use types::*;
