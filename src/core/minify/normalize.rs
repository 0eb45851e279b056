//! Shared character policy and the per-grammar post-pass.
//!
//! The scanners lean on three closed character sets: whitespace, "word"
//! characters that must never fuse across a removed gap, and the punctuation
//! that is always emitted tight against its neighbors. The post-pass here is
//! the finishing stage applied to a scanner's raw buffer before it is
//! returned.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace as the scanners see it (space, tab, newline, CR, form feed).
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// JS word characters: merging two of these across a removed gap would fuse
/// tokens (`return x` must not become `returnx`).
pub(crate) fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// CSS value characters: identifiers, numbers, units and the selector glyphs
/// that still need a separating space (`div .a` vs `div.a`).
pub(crate) fn is_css_value(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '*' | '#' | '.' | '%' | '-')
}

/// JS punctuation that never keeps whitespace on either side.
pub(crate) const JS_TIGHT: &[char] = &[',', ';', ':', '{', '}', '(', ')', '[', ']', '.'];

/// CSS punctuation that never keeps whitespace on either side.
pub(crate) const CSS_TIGHT: &[char] = &[':', ';', '{', '}', ',', '>', '+', '~', '(', ')', '='];

static RE_NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static RE_SEMI_BEFORE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r";+\s*\}").unwrap());
static RE_IMPORTANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*!important").unwrap());

/// JS finishing pass.
///
/// Punctuation tightening and newline collapsing already happen at emission
/// time inside the scanner, where literal boundaries are known; running them
/// here as blind regexes would rewrite the inside of string and template
/// literals. Only the outer trim is left to do on the buffer.
pub(crate) fn finish_js(raw: &str) -> String {
    raw.trim().to_string()
}

/// CSS finishing pass: drop semicolons that directly precede a closing brace,
/// pull `!important` tight, collapse newline runs, trim.
pub(crate) fn finish_css(raw: &str) -> String {
    let s = RE_SEMI_BEFORE_BRACE.replace_all(raw, "}");
    let s = RE_IMPORTANT.replace_all(&s, "!important");
    let s = RE_NEWLINE_RUN.replace_all(&s, "\n");
    s.trim().to_string()
}
