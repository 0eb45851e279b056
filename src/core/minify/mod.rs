//! The minification engine: two independent single-pass scanners sharing a
//! design pattern (and the whitespace/punctuation policy in [`normalize`]),
//! but no state. Each call owns its own scan state and output buffer, so
//! calls are safe to run concurrently across inputs with no coordination.

pub mod css;
pub mod js;
mod normalize;

pub use css::minify_css;
pub use js::minify_js;

use crate::core::models::Grammar;

/// Minify `source` according to the selected grammar.
///
/// The grammar tag is explicit; callers holding a string tag parse it through
/// [`Grammar::from_str`](std::str::FromStr), which rejects unknown tags
/// instead of silently defaulting to one grammar.
pub fn minify(source: &str, grammar: Grammar) -> String {
    match grammar {
        Grammar::Js => minify_js(source),
        Grammar::Css => minify_css(source),
    }
}
