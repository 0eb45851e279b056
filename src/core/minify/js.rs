//! Single-pass minifier for JavaScript-like source.
//!
//! One left-to-right scan over the input, character by character. The scanner
//! tracks its lexical context in a tagged [`Mode`] so that string, template,
//! regex and comment states cannot overlap. Comments are discarded,
//! whitespace collapses only where dropping it would fuse tokens, and literal
//! contents are copied byte for byte.
//!
//! Division vs. regex is decided from a single character of lookback. That is
//! a deliberate compromise: a fully correct answer needs a real parser, and
//! the known blind spots (postfix `++`/`--` before `/`, a regex right after a
//! keyword) are kept as-is rather than patched case by case.

use super::normalize::{self, is_space, is_word, JS_TIGHT};

/// Current lexical context. Exactly one mode is active at any scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Default,
    LineComment,
    BlockComment,
    /// Inside a `'` or `"` string literal.
    Str { quote: char },
    /// Inside a backtick literal; `expr_depth` counts `${ }` nesting.
    Template { expr_depth: u32 },
    Regex,
}

/// Can a `/` in this position start a regex literal?
///
/// True after characters that cannot end a value-producing expression:
/// opening brackets, separators and operators. Anything else (identifier
/// tail, closing bracket, a literal's terminator) forces division.
fn regex_can_follow(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => matches!(
            c,
            '(' | '['
                | '{'
                | ','
                | ';'
                | ':'
                | '='
                | '!'
                | '&'
                | '|'
                | '?'
                | '+'
                | '-'
                | '*'
                | '/'
                | '%'
                | '<'
                | '>'
                | '^'
                | '~'
        ),
    }
}

/// Drop a separator the scanner emitted earlier, now that tight punctuation
/// follows it. Only Default-mode separators can trail the buffer here, so
/// this never reaches into a literal.
fn retract_separator(out: &mut String, last_out: &mut Option<char>) {
    while matches!(out.chars().last(), Some(' ') | Some('\n')) {
        out.pop();
    }
    *last_out = out.chars().last();
}

/// Minify JavaScript-like source in a single pass.
///
/// Total over its input: malformed or truncated constructs degrade gracefully
/// by treating end-of-input as an implicit context close, and whatever was
/// buffered is returned as-is.
pub fn minify_js(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(source.len());

    let mut mode = Mode::Default;
    let mut escape = false;
    // Last emitted character; one character of lookback is all the engine
    // ever needs.
    let mut last_out: Option<char> = None;
    let mut i = 0;

    while i < n {
        let c = chars[i];

        match mode {
            Mode::LineComment => {
                if c == '\n' {
                    mode = Mode::Default;
                    // Keep one newline as a token separator, but never right
                    // after tight punctuation or another newline.
                    match last_out {
                        None => {}
                        Some(p) if p == '\n' || JS_TIGHT.contains(&p) => {}
                        Some(_) => {
                            out.push('\n');
                            last_out = Some('\n');
                        }
                    }
                }
                i += 1;
            }

            Mode::BlockComment => {
                if c == '*' && chars.get(i + 1) == Some(&'/') {
                    mode = Mode::Default;
                    i += 2;
                } else {
                    i += 1;
                }
            }

            Mode::Str { quote } => {
                out.push(c);
                last_out = Some(c);
                if !escape && c == quote {
                    mode = Mode::Default;
                }
                escape = !escape && c == '\\';
                i += 1;
            }

            Mode::Template { expr_depth } => {
                out.push(c);
                last_out = Some(c);
                if !escape {
                    if c == '`' && expr_depth == 0 {
                        mode = Mode::Default;
                        escape = false;
                        i += 1;
                        continue;
                    }
                    if c == '$' && chars.get(i + 1) == Some(&'{') {
                        out.push('{');
                        last_out = Some('{');
                        mode = Mode::Template {
                            expr_depth: expr_depth + 1,
                        };
                        escape = false;
                        i += 2;
                        continue;
                    }
                    if c == '}' && expr_depth > 0 {
                        mode = Mode::Template {
                            expr_depth: expr_depth - 1,
                        };
                    }
                }
                escape = !escape && c == '\\';
                i += 1;
            }

            Mode::Regex => {
                out.push(c);
                last_out = Some(c);
                if !escape && c == '/' {
                    // Flag characters after the closing slash are ordinary
                    // identifier characters; Default copies them as-is.
                    mode = Mode::Default;
                }
                escape = !escape && c == '\\';
                i += 1;
            }

            Mode::Default => {
                if c == '/' && chars.get(i + 1) == Some(&'/') {
                    mode = Mode::LineComment;
                    i += 2;
                    continue;
                }
                if c == '/' && chars.get(i + 1) == Some(&'*') {
                    mode = Mode::BlockComment;
                    i += 2;
                    continue;
                }
                if c == '"' || c == '\'' {
                    mode = Mode::Str { quote: c };
                    escape = false;
                    out.push(c);
                    last_out = Some(c);
                    i += 1;
                    continue;
                }
                if c == '`' {
                    mode = Mode::Template { expr_depth: 0 };
                    escape = false;
                    out.push(c);
                    last_out = Some(c);
                    i += 1;
                    continue;
                }
                if c == '/' && regex_can_follow(last_out) {
                    mode = Mode::Regex;
                    escape = false;
                    out.push(c);
                    last_out = Some(c);
                    i += 1;
                    continue;
                }

                if is_space(c) {
                    // Inspect the whole run at once.
                    let mut saw_newline = c == '\n';
                    let mut j = i + 1;
                    while j < n && is_space(chars[j]) {
                        saw_newline |= chars[j] == '\n';
                        j += 1;
                    }
                    let next = chars.get(j).copied();
                    if let (Some(prev), Some(next)) = (last_out, next) {
                        if is_word(prev) && is_word(next) {
                            // A run containing a newline keeps the newline so
                            // line-based semantics survive a re-scan.
                            let sep = if saw_newline { '\n' } else { ' ' };
                            out.push(sep);
                            last_out = Some(sep);
                        }
                    }
                    i = j;
                    continue;
                }

                if JS_TIGHT.contains(&c) {
                    retract_separator(&mut out, &mut last_out);
                }
                out.push(c);
                last_out = Some(c);
                i += 1;
            }
        }
    }

    normalize::finish_js(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_removed() {
        assert_eq!(minify_js("let a = 1; // trailing\nlet b = 2;"), "let a=1;let b=2;");
    }

    #[test]
    fn test_block_comment_removed() {
        assert_eq!(minify_js("a /* gone */ b"), "a b");
        assert_eq!(minify_js("/* leading */ code"), "code");
    }

    #[test]
    fn test_whitespace_between_words_collapses_to_one_space() {
        assert_eq!(minify_js("return    x"), "return x");
        assert_eq!(minify_js("a\t \tb"), "a b");
    }

    #[test]
    fn test_whitespace_around_punctuation_dropped() {
        assert_eq!(minify_js("f( a , b )"), "f(a,b)");
        assert_eq!(minify_js("obj . prop"), "obj.prop");
    }

    #[test]
    fn test_newline_kept_between_statements() {
        assert_eq!(minify_js("let a = 1\nlet b = 2"), "let a=1\nlet b=2");
    }

    #[test]
    fn test_newline_retracted_before_punctuation() {
        // a line comment's newline vanishes when a tight character follows
        assert_eq!(minify_js("obj // call\n.method()"), "obj.method()");
    }

    #[test]
    fn test_string_contents_untouched() {
        assert_eq!(
            minify_js("const s = \"a  //  b  /* c */\";"),
            "const s=\"a  //  b  /* c */\";"
        );
        assert_eq!(minify_js("const q = 'don\\'t  trim';"), "const q='don\\'t  trim';");
    }

    #[test]
    fn test_template_with_nested_interpolation() {
        let src = "`a${ `b${c}` }d`";
        assert_eq!(minify_js(src), src);
    }

    #[test]
    fn test_template_closing_brace_without_interpolation() {
        // `}` inside a template at depth 0 is plain text
        let src = "`a } b`";
        assert_eq!(minify_js(src), src);
    }

    #[test]
    fn test_regex_after_operator_preserved_verbatim() {
        assert_eq!(minify_js("x = / a b /g;"), "x=/ a b /g;");
        assert_eq!(minify_js("f(/re  gex/)"), "f(/re  gex/)");
    }

    #[test]
    fn test_division_after_identifier() {
        assert_eq!(minify_js("a / b / c"), "a/b/c");
        assert_eq!(minify_js("(a + b) / 2"), "(a+b)/2");
    }

    #[test]
    fn test_division_after_string_terminator() {
        assert_eq!(minify_js("'a' / 2"), "'a'/2");
    }

    #[test]
    fn test_known_heuristic_blind_spot_after_keyword() {
        // The one-character lookback sees `n` and picks division; the output
        // still reparses as a regex after `return`.
        assert_eq!(minify_js("return /ab/g;"), "return/ab/g;");
    }

    #[test]
    fn test_unterminated_string_degrades_gracefully() {
        assert_eq!(minify_js("var s = 'abc"), "var s='abc");
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(minify_js("a /* never closed"), "a");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(minify_js(""), "");
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        assert_eq!(minify_js(r#"s = "a\"b";"#), r#"s="a\"b";"#);
    }

    #[test]
    fn test_escaped_slash_does_not_close_regex() {
        assert_eq!(minify_js(r"x = /a\/b/;"), r"x=/a\/b/;");
    }
}
