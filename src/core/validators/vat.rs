//! EU VAT identifier validation: format patterns per country, no checksum
//! arithmetic. Greece registers as EL, GB kept for legacy data.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static COUNTRY_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("AT", r"^ATU\d{8}$"),
        ("BE", r"^BE0?\d{9}$"),
        ("BG", r"^BG\d{9,10}$"),
        ("CY", r"^CY\d{8}[A-Z]$"),
        ("CZ", r"^CZ\d{8,10}$"),
        ("DE", r"^DE\d{9}$"),
        ("DK", r"^DK\d{8}$"),
        ("EE", r"^EE\d{9}$"),
        ("EL", r"^EL\d{9}$"),
        ("ES", r"^ES[A-Z0-9]\d{7}[A-Z0-9]$"),
        ("FI", r"^FI\d{8}$"),
        ("FR", r"^FR[A-HJ-NP-Z0-9]{2}\d{9}$"),
        ("HR", r"^HR\d{11}$"),
        ("HU", r"^HU\d{8}$"),
        ("IE", r"^IE\d{7}[A-W][A-I]?$"),
        ("IT", r"^IT\d{11}$"),
        ("LT", r"^LT(\d{9}|\d{12})$"),
        ("LU", r"^LU\d{8}$"),
        ("LV", r"^LV\d{11}$"),
        ("MT", r"^MT\d{8}$"),
        ("NL", r"^NL\d{9}B\d{2}$"),
        ("PL", r"^PL\d{10}$"),
        ("PT", r"^PT\d{9}$"),
        ("RO", r"^RO\d{2,10}$"),
        ("SE", r"^SE\d{12}$"),
        ("SI", r"^SI\d{8}$"),
        ("SK", r"^SK\d{10}$"),
        ("GB", r"^GB(\d{9}|\d{12}|GD\d{3}|HA\d{3})$"),
    ]
    .into_iter()
    .map(|(cc, pattern)| (cc, Regex::new(pattern).unwrap()))
    .collect()
});

#[derive(Debug, Clone, Default)]
pub struct VatOptions {
    pub allowed: Option<Vec<String>>,
    pub blocked: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VatReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    pub issues: Vec<&'static str>,
}

/// Strip spaces, dots, dashes, underscores and slashes, then uppercase.
pub fn normalize_vat(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '-' | '_' | '/'))
        .collect::<String>()
        .to_uppercase()
}

/// Two-letter prefix of the normalized value, if alphabetic.
pub fn detect_country(raw: &str) -> Option<String> {
    let n = normalize_vat(raw);
    let prefix = n.get(..2)?;
    prefix
        .chars()
        .all(|c| c.is_ascii_uppercase())
        .then(|| prefix.to_string())
}

pub fn is_vat_safe(raw: &str) -> VatReport {
    is_vat_safe_with(raw, &VatOptions::default())
}

pub fn is_vat_safe_with(raw: &str, opts: &VatOptions) -> VatReport {
    let normalized = normalize_vat(raw);
    if normalized.is_empty() {
        return VatReport {
            ok: false,
            country: None,
            normalized: None,
            issues: vec!["empty"],
        };
    }

    let mut issues = Vec::new();
    let cc = detect_country(&normalized);
    if cc.is_none() {
        issues.push("missing_prefix");
    }

    if let Some(cc) = &cc {
        if let Some(allow) = &opts.allowed {
            if !allow.iter().any(|a| a == cc) {
                issues.push("country_not_allowed");
            }
        }
        if let Some(block) = &opts.blocked {
            if block.iter().any(|b| b == cc) {
                issues.push("country_blocked");
            }
        }
    }

    let pattern = cc
        .as_deref()
        .and_then(|cc| COUNTRY_PATTERNS.iter().find(|(code, _)| *code == cc));
    let Some((_, re)) = pattern else {
        issues.push("country_unsupported");
        issues.dedup();
        return VatReport {
            ok: false,
            country: None,
            normalized: None,
            issues,
        };
    };

    if !re.is_match(&normalized) {
        issues.push("bad_pattern");
    }

    issues.dedup();
    let ok = issues.is_empty();
    VatReport {
        ok,
        country: cc,
        normalized: ok.then(|| normalized.clone()),
        issues,
    }
}
