// CLI layer
pub mod commands;

pub use commands::*;
