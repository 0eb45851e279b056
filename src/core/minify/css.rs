//! Single-pass minifier for CSS-like source.
//!
//! Structurally the same scan as the JS side, with a smaller context set:
//! CSS has no template or regex literals, so only block comments and quoted
//! strings need tracking. Whitespace collapses to at most one space, and only
//! between two value characters; the structural punctuation set is emitted
//! maximally tight against its neighbors.

use super::normalize::{self, is_css_value, is_space, CSS_TIGHT};

/// Current lexical context of the CSS scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Default,
    BlockComment,
    Str { quote: char },
}

/// Minify CSS-like source in a single pass.
///
/// Total over its input; an unterminated string or comment at end of input is
/// treated as implicitly closed.
pub fn minify_css(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(source.len());

    let mut mode = Mode::Default;
    let mut escape = false;
    let mut i = 0;

    while i < n {
        let c = chars[i];

        match mode {
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
                if !escape && c == quote {
                    mode = Mode::Default;
                }
                escape = !escape && c == '\\';
                i += 1;
            }

            Mode::Default => {
                if c == '/' && chars.get(i + 1) == Some(&'*') {
                    mode = Mode::BlockComment;
                    i += 2;
                    continue;
                }
                if c == '"' || c == '\'' {
                    mode = Mode::Str { quote: c };
                    escape = false;
                    out.push(c);
                    i += 1;
                    continue;
                }

                if is_space(c) {
                    let mut j = i + 1;
                    while j < n && is_space(chars[j]) {
                        j += 1;
                    }
                    // One space survives only between two value characters
                    let prev = out.chars().last();
                    let next = chars.get(j).copied();
                    if prev.map_or(false, is_css_value) && next.map_or(false, is_css_value) {
                        out.push(' ');
                    }
                    i = j;
                    continue;
                }

                if CSS_TIGHT.contains(&c) {
                    // Retract any pending separator before structural
                    // punctuation; nothing goes after it either.
                    if out.ends_with(' ') {
                        out.pop();
                    }
                    out.push(c);
                    i += 1;
                    continue;
                }

                out.push(c);
                i += 1;
            }
        }
    }

    normalize::finish_css(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_removed() {
        assert_eq!(minify_css("/* header */ a { color: red; }"), "a{color:red}");
    }

    #[test]
    fn test_structural_identity() {
        assert_eq!(
            minify_css("a { color : red ; margin : 0 ; }"),
            "a{color:red;margin:0}"
        );
    }

    #[test]
    fn test_descendant_combinator_keeps_space() {
        assert_eq!(minify_css("div  .item { }"), "div .item{}");
        assert_eq!(minify_css("ul li { }"), "ul li{}");
    }

    #[test]
    fn test_child_combinator_is_tight() {
        assert_eq!(minify_css("a > b { }"), "a>b{}");
        assert_eq!(minify_css("a + b ~ c { }"), "a+b~c{}");
    }

    #[test]
    fn test_shorthand_values_keep_spaces() {
        assert_eq!(minify_css("p { margin : 0 auto 10px 5% ; }"), "p{margin:0 auto 10px 5%}");
    }

    #[test]
    fn test_string_contents_untouched() {
        assert_eq!(
            minify_css("a::before { content : ' x  /* not a comment */  y ' ; }"),
            "a::before{content:' x  /* not a comment */  y '}"
        );
    }

    #[test]
    fn test_important_pulled_tight() {
        assert_eq!(minify_css("a { color : red !important ; }"), "a{color:red!important}");
    }

    #[test]
    fn test_unterminated_comment() {
        assert_eq!(minify_css("a{} /* dangling"), "a{}");
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(minify_css("a { content: 'open"), "a{content:'open");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(minify_css(""), "");
    }

    #[test]
    fn test_media_query() {
        assert_eq!(
            minify_css("@media ( min-width : 600px ) { a { color : blue ; } }"),
            "@media(min-width:600px){a{color:blue}}"
        );
    }
}
