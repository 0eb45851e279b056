//! E.164 phone number helpers: separator-stripping normalization and the
//! strict `+` plus 7..15 digit format check.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_E164: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").unwrap());

/// Strip common separators and parentheses, map a leading `00` to `+`, and
/// guarantee exactly one leading `+`. Empty input stays empty.
pub fn normalize_phone(input: &str) -> String {
    let s = input.trim();
    if s.is_empty() {
        return String::new();
    }

    let stripped: String = s
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '-' | '.' | '_') && !c.is_whitespace())
        .collect();
    let stripped = if let Some(rest) = stripped.strip_prefix("00") {
        format!("+{}", rest)
    } else {
        stripped
    };

    let body: String = stripped
        .strip_prefix('+')
        .unwrap_or(&stripped)
        .chars()
        .filter(|c| *c != '+')
        .collect();
    format!("+{}", body)
}

/// Strict E.164: `+`, a nonzero first digit, 7 to 15 digits total.
pub fn is_e164(input: &str) -> bool {
    RE_E164.is_match(input.trim())
}

/// Empty input is acceptable; anything else must normalize to valid E.164.
pub fn validate_optional_e164(input: &str) -> bool {
    let v = normalize_phone(input);
    v.is_empty() || is_e164(&v)
}
