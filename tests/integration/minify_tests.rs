use safetext::{minify, minify_css, minify_js, Grammar};

const JS_SAMPLE: &str = r#"
// app entry
function greet(name) {
    /* join and
       return */
    const msg = `hello, ${name}!`;
    return msg;
}

let ratio = total / count; // division, not regex
let words = text.split( /\s+/ );
"#;

const CSS_SAMPLE: &str = "
/* layout */
.wrap , .inner {
    margin : 0 auto ;
    padding : 1px  2px ;
    color : red !important ;
}

@media ( min-width : 600px ) {
    .wrap { color : blue ; }
}
";

#[test]
fn js_minification_is_idempotent() {
    let once = minify_js(JS_SAMPLE);
    assert_eq!(minify_js(&once), once);
}

#[test]
fn css_minification_is_idempotent() {
    let once = minify_css(CSS_SAMPLE);
    assert_eq!(minify_css(&once), once);
}

#[test]
fn idempotence_holds_on_awkward_constructs() {
    for src in [
        "obj // note\n.call()\nlet x = 1\nlet y = 2",
        "x = /a b/g\ny = a / b / c",
        "`t ${ `n ${x}` } t`\nreturn value",
        "a /* c */ b // d\nc",
    ] {
        let once = minify_js(src);
        assert_eq!(minify_js(&once), once, "input: {:?}", src);
    }
}

#[test]
fn comments_never_survive() {
    let out = minify_js(JS_SAMPLE);
    assert!(!out.contains("//"));
    assert!(!out.contains("/*"));
    let out = minify_css(CSS_SAMPLE);
    assert!(!out.contains("/*"));
}

#[test]
fn string_template_and_regex_literals_survive_byte_for_byte() {
    let out = minify_js(JS_SAMPLE);
    assert!(out.contains("`hello, ${name}!`"));
    assert!(out.contains(r"/\s+/"));

    let out = minify_js(r#"const s = "two  spaces // not a comment";"#);
    assert!(out.contains("two  spaces // not a comment"));
}

#[test]
fn words_are_never_fused() {
    let out = minify_js("return value");
    assert_eq!(out, "return value");
    let out = minify_js("let a = 1\nconst b = 2");
    assert_eq!(out, "let a=1\nconst b=2");
}

#[test]
fn css_structural_identity() {
    assert_eq!(
        minify_css("a {\n  color: red;\n  margin: 0;\n}\n"),
        "a{color:red;margin:0}"
    );
    assert_eq!(
        minify_css("a { color : red ; margin : 0 ; }"),
        "a{color:red;margin:0}"
    );
}

#[test]
fn css_media_query_and_important() {
    let out = minify_css(CSS_SAMPLE);
    assert!(out.contains("@media(min-width:600px){.wrap{color:blue}}"));
    assert!(out.contains("color:red!important"));
}

#[test]
fn css_keeps_space_inside_shorthand_values() {
    assert_eq!(minify_css("p { margin: 0 auto; }"), "p{margin:0 auto}");
}

#[test]
fn dispatch_matches_direct_calls() {
    assert_eq!(minify(JS_SAMPLE, Grammar::Js), minify_js(JS_SAMPLE));
    assert_eq!(minify(CSS_SAMPLE, Grammar::Css), minify_css(CSS_SAMPLE));
}

#[test]
fn empty_and_whitespace_only_inputs() {
    assert_eq!(minify_js(""), "");
    assert_eq!(minify_js("   \n\t  "), "");
    assert_eq!(minify_css("\n\n"), "");
}
