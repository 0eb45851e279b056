//! US taxpayer identification numbers: EIN, SSN, and ITIN, with type
//! detection and allow/block filtering.

use serde::Serialize;

// IRS-issued EIN prefixes, historical plus current
static EIN_PREFIXES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "10", "11", "12", "13", "14", "15", "16",
    "20", "21", "22", "23", "24", "25", "26", "27", "30", "31", "32", "33", "34",
    "35", "36", "37", "38", "39", "40", "41", "42", "43", "44", "45", "46", "47",
    "48", "50", "51", "52", "53", "54", "55", "56", "57", "58", "59", "60", "61",
    "62", "63", "64", "65", "66", "67", "68", "71", "72", "73", "74", "75", "76",
    "77", "80", "81", "82", "83", "84", "85", "86", "87", "88", "90", "91", "92",
    "94", "95", "98", "99",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TinType {
    Ein,
    Ssn,
    Itin,
    Unknown,
}

#[derive(Debug, Clone, Default)]
pub struct TinOptions {
    pub allow_types: Option<Vec<TinType>>,
    pub block_types: Option<Vec<TinType>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TinReport {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    #[serde(rename = "type")]
    pub tin_type: TinType,
    pub issues: Vec<&'static str>,
}

/// Strip everything that is not a digit.
pub fn normalize_tin(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn nine_digits(s: &str) -> bool {
    s.len() == 9 && s.chars().all(|c| c.is_ascii_digit())
}

/// EIN: nine digits with an IRS-issued two-digit prefix.
pub fn is_ein(raw: &str) -> bool {
    let s = normalize_tin(raw);
    nine_digits(&s) && EIN_PREFIXES.contains(&&s[..2])
}

/// SSN: nine digits, excluding the invalid area/group/serial ranges and the
/// famous advertising sample 078-05-1120.
pub fn is_ssn(raw: &str) -> bool {
    let s = normalize_tin(raw);
    if !nine_digits(&s) {
        return false;
    }
    let area = &s[..3];
    let group = &s[3..5];
    let serial = &s[5..];
    if area == "000" || area == "666" || area >= "900" {
        return false;
    }
    if group == "00" || serial == "0000" {
        return false;
    }
    s != "078051120"
}

/// ITIN: nine digits starting with 9, group in 70-88, 90-92 or 94-99.
pub fn is_itin(raw: &str) -> bool {
    let s = normalize_tin(raw);
    if !nine_digits(&s) || !s.starts_with('9') {
        return false;
    }
    let group = &s[3..5];
    let g: u32 = match group.parse() {
        Ok(g) => g,
        Err(_) => return false,
    };
    let in_range = (70..=88).contains(&g) || (90..=92).contains(&g) || (94..=99).contains(&g);
    in_range && group != "00" && &s[5..] != "0000"
}

pub fn validate_tin(raw: &str) -> TinReport {
    validate_tin_with(raw, &TinOptions::default())
}

pub fn validate_tin_with(raw: &str, opts: &TinOptions) -> TinReport {
    let s = normalize_tin(raw);
    let mut types = Vec::new();
    if is_ein(&s) {
        types.push(TinType::Ein);
    }
    if is_ssn(&s) {
        types.push(TinType::Ssn);
    }
    if is_itin(&s) {
        types.push(TinType::Itin);
    }

    let mut chosen = types.first().copied().unwrap_or(TinType::Unknown);
    if let Some(allow) = &opts.allow_types {
        if !allow.is_empty() {
            chosen = types
                .iter()
                .copied()
                .find(|t| allow.contains(t))
                .unwrap_or(TinType::Unknown);
        }
    }
    if let Some(block) = &opts.block_types {
        if block.contains(&chosen) {
            return TinReport {
                ok: false,
                normalized: Some(s),
                tin_type: chosen,
                issues: vec!["type_blocked"],
            };
        }
    }

    let ok = chosen != TinType::Unknown;
    let mut issues = Vec::new();
    if !ok {
        if nine_digits(&s) {
            issues.push("unknown_type");
        } else {
            issues.push("bad_format");
        }
    }
    TinReport {
        ok,
        normalized: ok.then(|| s.clone()),
        tin_type: chosen,
        issues,
    }
}
