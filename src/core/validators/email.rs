//! Conservative ASCII email validation and normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_LOCAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+$").unwrap());
static RE_DOMAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+$").unwrap());
static RE_TLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{2,63}$").unwrap());

/// Trim and lowercase.
pub fn normalize_email(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Validate against a conservative RFC 5322 subset: ASCII only, local part up
/// to 64 characters, dot-separated domain labels up to 63 with an alphabetic
/// TLD.
pub fn is_email(input: &str) -> bool {
    let s = input.trim();
    if s.is_empty() || s.len() > 254 {
        return false;
    }

    let at = match s.find('@') {
        Some(pos) if pos > 0 && pos < s.len() - 1 => pos,
        _ => return false,
    };
    if !s.is_ascii() {
        return false;
    }
    let (local, domain) = (&s[..at], &s[at + 1..]);

    if local.len() > 64 || !RE_LOCAL.is_match(local) {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    if !RE_DOMAIN.is_match(domain) || domain.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    if labels
        .iter()
        .any(|l| l.is_empty() || l.len() > 63 || l.starts_with('-') || l.ends_with('-'))
    {
        return false;
    }

    RE_TLD.is_match(labels[labels.len() - 1])
}
