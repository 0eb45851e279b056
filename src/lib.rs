// safetext - single-pass JS/CSS minification plus strict input validators

pub mod cli;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use crate::core::minify::{minify_css, minify_js};
pub use crate::core::models::{Grammar, MinifyStats};
pub use crate::core::{minify, validators};
pub use crate::utils::{Result, SafeTextError};
