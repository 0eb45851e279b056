//! Card number validation: digits-only normalization, Luhn check, brand
//! detection by IIN range, per-brand length tables.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Jcb,
    Diners,
    Unionpay,
    Maestro,
    Mir,
}

impl Brand {
    pub fn allowed_lengths(&self) -> &'static [usize] {
        match self {
            Brand::Visa => &[13, 16, 19],
            Brand::Mastercard => &[16],
            Brand::Amex => &[15],
            Brand::Discover => &[16, 17, 18, 19],
            Brand::Jcb => &[16, 17, 18, 19],
            Brand::Diners => &[14, 15, 16],
            Brand::Unionpay => &[16, 17, 18, 19],
            Brand::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
            Brand::Mir => &[16, 17, 18, 19],
        }
    }
}

// IIN patterns, most specific first
static BRAND_PATTERNS: Lazy<Vec<(Brand, Regex)>> = Lazy::new(|| {
    vec![
        (Brand::Visa, Regex::new(r"^4\d{12}(\d{3})?(\d{3})?$").unwrap()),
        (
            Brand::Mastercard,
            // 51-55, plus the 2221-2720 range
            Regex::new(r"^(5[1-5]\d{14}|2(22[1-9]|2[3-9]\d|[3-6]\d{2}|7([01]\d|20))\d{12})$")
                .unwrap(),
        ),
        (Brand::Amex, Regex::new(r"^3[47]\d{13}$").unwrap()),
        (
            Brand::Discover,
            // 6011, 622126-622925, 644-649, 65
            Regex::new(
                r"^(6011\d{12}|65\d{14}|64[4-9]\d{13}|622(12[6-9]|1[3-9]\d|[2-8]\d{2}|9([01]\d|2[0-5]))\d{10,12})$",
            )
            .unwrap(),
        ),
        (Brand::Jcb, Regex::new(r"^35(2[89]|[3-8]\d)\d{12,15}$").unwrap()),
        (
            Brand::Diners,
            // 300-305, 3095, 36, 38-39
            Regex::new(r"^(3(0[0-5]\d{11}|095\d{10}|6\d{12}|[89]\d{12}))\d{0,2}$").unwrap(),
        ),
        (Brand::Unionpay, Regex::new(r"^62\d{14,17}$").unwrap()),
        (
            Brand::Maestro,
            Regex::new(r"^(50|56|57|58|63|67)\d{10,17}$").unwrap(),
        ),
        (Brand::Mir, Regex::new(r"^220[0-4]\d{12,15}$").unwrap()),
    ]
});

#[derive(Debug, Clone)]
pub struct CardOptions {
    pub allow_brands: Option<Vec<Brand>>,
    pub block_brands: Option<Vec<Brand>>,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            allow_brands: None,
            block_brands: None,
            min_length: 12,
            max_length: 19,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    pub issues: Vec<&'static str>,
}

pub fn detect_brand(digits: &str) -> Option<Brand> {
    BRAND_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(digits))
        .map(|(brand, _)| *brand)
}

/// Luhn checksum over a digits-only string.
pub fn luhn_ok(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut alt = false;
    for c in digits.chars().rev() {
        let Some(mut n) = c.to_digit(10) else {
            return false;
        };
        if alt {
            n *= 2;
            if n > 9 {
                n -= 9;
            }
        }
        sum += n;
        alt = !alt;
    }
    sum % 10 == 0
}

pub fn validate_card(input: &str) -> CardReport {
    validate_card_with(input, &CardOptions::default())
}

pub fn validate_card_with(input: &str, opts: &CardOptions) -> CardReport {
    let raw = input.trim();
    if raw.is_empty() {
        return CardReport {
            ok: false,
            normalized: None,
            brand: None,
            last4: None,
            issues: vec!["empty"],
        };
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut issues = Vec::new();

    if digits.is_empty() {
        issues.push("non_digit_chars");
    }
    if digits.len() < opts.min_length {
        issues.push("too_short");
    }
    if digits.len() > opts.max_length {
        issues.push("too_long");
    }

    let brand = detect_brand(&digits);
    match brand {
        None => issues.push("unknown_brand"),
        Some(b) => {
            if !b.allowed_lengths().contains(&digits.len()) {
                issues.push("length_not_allowed_for_brand");
            }
            if let Some(allow) = &opts.allow_brands {
                if !allow.contains(&b) {
                    issues.push("brand_not_allowed");
                }
            }
            if let Some(block) = &opts.block_brands {
                if block.contains(&b) {
                    issues.push("brand_blocked");
                }
            }
        }
    }

    if !luhn_ok(&digits) {
        issues.push("luhn_failed");
    }

    let ok = issues.is_empty();
    let last4 = if digits.len() >= 4 {
        Some(digits[digits.len() - 4..].to_string())
    } else {
        None
    };

    CardReport {
        ok,
        normalized: ok.then(|| digits.clone()),
        brand,
        last4,
        issues,
    }
}
