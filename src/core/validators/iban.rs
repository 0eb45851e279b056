//! IBAN validation: normalization, per-country length table, mod-97 checksum.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static RE_BASIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}\d{2}[A-Z0-9]+$").unwrap());

// Registry lengths for the common IBAN countries
static COUNTRY_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20),
    ("BE", 16), ("BG", 22), ("BH", 22), ("BR", 29), ("BY", 28), ("CH", 21),
    ("CR", 22), ("CY", 28), ("CZ", 24), ("DE", 22), ("DK", 18), ("DO", 28),
    ("EE", 20), ("EG", 29), ("ES", 24), ("FI", 18), ("FO", 18), ("FR", 27),
    ("GB", 22), ("GE", 22), ("GI", 23), ("GL", 18), ("GR", 27), ("GT", 28),
    ("HR", 21), ("HU", 28), ("IE", 22), ("IL", 23), ("IS", 26), ("IT", 27),
    ("JO", 30), ("KW", 30), ("KZ", 20), ("LB", 28), ("LC", 32), ("LI", 21),
    ("LT", 20), ("LU", 20), ("LV", 21), ("MC", 27), ("MD", 24), ("ME", 22),
    ("MK", 19), ("MR", 27), ("MT", 31), ("MU", 30), ("NL", 18), ("NO", 15),
    ("PK", 24), ("PL", 28), ("PS", 29), ("PT", 25), ("QA", 29), ("RO", 24),
    ("RS", 22), ("SA", 24), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27),
    ("TN", 24), ("TR", 26), ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20),
];

fn country_length(cc: &str) -> Option<usize> {
    COUNTRY_LENGTHS
        .iter()
        .find(|(code, _)| *code == cc)
        .map(|(_, len)| *len)
}

#[derive(Debug, Clone)]
pub struct IbanOptions {
    pub allow_countries: Option<Vec<String>>,
    pub block_countries: Option<Vec<String>>,
    pub strict_case: bool,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for IbanOptions {
    fn default() -> Self {
        Self {
            allow_countries: None,
            block_countries: None,
            strict_case: false,
            min_length: 15,
            max_length: 34,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IbanReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    pub issues: Vec<&'static str>,
}

fn report(ok: bool, normalized: Option<String>, mut issues: Vec<&'static str>) -> IbanReport {
    issues.dedup();
    IbanReport {
        ok,
        normalized,
        issues,
    }
}

/// Mod-97 remainder over the rotated IBAN (BBAN + country + check digits),
/// with letters expanded to their two-digit values.
fn mod97(iban: &str) -> u32 {
    let rotated = format!("{}{}", &iban[4..], &iban[..4]);
    let mut rem: u32 = 0;
    for c in rotated.chars() {
        if let Some(d) = c.to_digit(10) {
            rem = (rem * 10 + d) % 97;
        } else if c.is_ascii_uppercase() {
            let v = c as u32 - 'A' as u32 + 10; // 10..=35, always two digits
            rem = (rem * 10 + v / 10) % 97;
            rem = (rem * 10 + v % 10) % 97;
        }
    }
    rem
}

pub fn is_iban_safe(input: &str) -> IbanReport {
    is_iban_safe_with(input, &IbanOptions::default())
}

pub fn is_iban_safe_with(input: &str, opts: &IbanOptions) -> IbanReport {
    let raw = input.trim();
    if raw.is_empty() {
        return report(false, None, vec!["empty"]);
    }

    let mut issues = Vec::new();

    if opts.strict_case && raw.chars().any(|c| c.is_ascii_lowercase()) {
        issues.push("lowercase_disallowed");
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c.is_whitespace()) {
        issues.push("non_alphanumeric");
    }

    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if normalized.len() < opts.min_length {
        issues.push("too_short");
    }
    if normalized.len() > opts.max_length {
        issues.push("too_long");
    }
    if !RE_BASIC.is_match(&normalized) {
        issues.push("bad_basic_format");
    }
    if !normalized.is_ascii() || normalized.len() < 4 {
        issues.push("bad_basic_format");
        return report(false, None, issues);
    }

    let cc = &normalized[..2];
    let check_digits = &normalized[2..4];

    match country_length(cc) {
        None => issues.push("country_not_in_registry"),
        Some(expected) if normalized.len() != expected => issues.push("bad_length_for_country"),
        Some(_) => {}
    }

    if !check_digits.chars().all(|c| c.is_ascii_digit()) {
        issues.push("bad_check_digits");
    }

    if let Some(allow) = &opts.allow_countries {
        if !allow.iter().any(|a| a == cc) {
            issues.push("country_not_allowed");
        }
    }
    if let Some(block) = &opts.block_countries {
        if block.iter().any(|b| b == cc) {
            issues.push("country_blocked");
        }
    }

    if mod97(&normalized) != 1 {
        issues.push("checksum_failed");
    }

    let ok = issues.is_empty();
    report(ok, ok.then(|| normalized.clone()), issues)
}
