// Core domain layer
pub mod minify;
pub mod models;
pub mod validators;

pub use minify::minify;
pub use models::*;
