//! Password strength checks with O(n) scans and no catastrophic regex:
//! character-set coverage, dictionary hits, sequential runs, repeated blocks,
//! and a rough entropy estimate.

use serde::Serialize;

const DEFAULT_DICT: &[&str] = &[
    "password",
    "passw0rd",
    "123456",
    "123456789",
    "qwerty",
    "letmein",
    "admin",
    "welcome",
    "iloveyou",
    "monkey",
    "dragon",
];

const KEYBOARD_ROWS: &[&str] = &[
    "abcdefghijklmnopqrstuvwxyz",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
    "0123456789",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharSet {
    Lower,
    Upper,
    Digit,
    Symbol,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SetCoverage {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl SetCoverage {
    fn scan(password: &str) -> Self {
        Self {
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    fn has(&self, set: CharSet) -> bool {
        match set {
            CharSet::Lower => self.lower,
            CharSet::Upper => self.upper,
            CharSet::Digit => self.digit,
            CharSet::Symbol => self.symbol,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub min_length: usize,
    pub max_length: usize,
    pub min_entropy: f64,
    pub require_sets: Vec<CharSet>,
    pub dictionaries: Vec<String>,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 1024,
            min_entropy: 60.0,
            require_sets: vec![CharSet::Lower, CharSet::Upper, CharSet::Digit, CharSet::Symbol],
            dictionaries: DEFAULT_DICT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordReport {
    pub ok: bool,
    pub score: u8,
    pub entropy_bits: u32,
    pub length: usize,
    pub sets: SetCoverage,
    pub reasons: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn validate_password(password: &str) -> PasswordReport {
    validate_password_with(password, &PasswordOptions::default())
}

pub fn validate_password_with(password: &str, cfg: &PasswordOptions) -> PasswordReport {
    let mut reasons = Vec::new();
    let mut suggestions = Vec::new();
    let sets = SetCoverage::scan(password);
    let length = password.chars().count();

    if length < cfg.min_length {
        reasons.push(format!("length < {}", cfg.min_length));
    }
    if length > cfg.max_length {
        reasons.push(format!("length > {}", cfg.max_length));
    }

    for need in &cfg.require_sets {
        if !sets.has(*need) {
            reasons.push(format!("missing {:?}", need).to_lowercase());
        }
    }

    let dict_hit = dictionary_hit(password, &cfg.dictionaries);
    if let Some(hit) = &dict_hit {
        reasons.push(format!("dictionary-like: {}", hit));
    }

    let seq = has_sequential_run(password, 4);
    if seq {
        reasons.push("sequential characters".into());
    }

    let rep = has_repeated_block(password, 3);
    if rep {
        reasons.push("repeated block".into());
    }

    let entropy = estimate_entropy_bits(password, &sets);
    if entropy < cfg.min_entropy {
        reasons.push(format!("entropy < {}b", cfg.min_entropy as u32));
    }

    if !reasons.is_empty() {
        if length < cfg.min_length {
            suggestions.push(format!("use >= {} chars", cfg.min_length));
        }
        for (present, name) in [
            (sets.lower, "lower"),
            (sets.upper, "upper"),
            (sets.digit, "digit"),
            (sets.symbol, "symbol"),
        ] {
            if !present {
                suggestions.push(format!("add {}", name));
            }
        }
        if dict_hit.is_some() {
            suggestions.push("avoid common words and keyboard patterns".into());
        }
        if seq || rep {
            suggestions.push("avoid sequences and repeats".into());
        }
    }

    let base: i32 = if entropy >= 100.0 {
        4
    } else if entropy >= 80.0 {
        3
    } else if entropy >= 60.0 {
        2
    } else if entropy >= 40.0 {
        1
    } else {
        0
    };
    let penalty = if reasons.is_empty() { 0 } else { 1 };
    let score = (base - penalty).clamp(0, 4) as u8;

    PasswordReport {
        ok: reasons.is_empty(),
        score,
        entropy_bits: entropy.round() as u32,
        length,
        sets,
        reasons,
        suggestions,
    }
}

/// Exact or substring (length >= 4) match against the dictionary, after
/// lowercasing and stripping everything but a-z0-9.
fn dictionary_hit(password: &str, dictionaries: &[String]) -> Option<String> {
    let s: String = password
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    if s.is_empty() {
        return None;
    }
    if dictionaries.iter().any(|d| d.to_lowercase() == s) {
        return Some(s);
    }
    for i in 0..s.len().saturating_sub(3) {
        for j in (i + 4)..=s.len() {
            let sub = &s[i..j];
            if dictionaries.iter().any(|d| d.to_lowercase() == sub) {
                return Some(sub.to_string());
            }
        }
    }
    None
}

/// Runs like `abcd`, `4321`, or a keyboard row slice (either direction).
fn has_sequential_run(password: &str, run_len: usize) -> bool {
    let codes: Vec<u32> = password.chars().map(|c| c as u32).collect();
    let mut up = 1;
    let mut down = 1;
    for w in codes.windows(2) {
        if w[1] == w[0] + 1 {
            up += 1;
            down = 1;
        } else if w[1] + 1 == w[0] {
            down += 1;
            up = 1;
        } else {
            up = 1;
            down = 1;
        }
        if up >= run_len || down >= run_len {
            return true;
        }
    }

    let lower = password.to_lowercase();
    for row in KEYBOARD_ROWS {
        if has_substring_run(&lower, row, run_len) {
            return true;
        }
        let reversed: String = row.chars().rev().collect();
        if has_substring_run(&lower, &reversed, run_len) {
            return true;
        }
    }
    false
}

fn has_substring_run(s: &str, row: &str, run_len: usize) -> bool {
    if row.len() < run_len {
        return false;
    }
    for i in 0..=(row.len() - run_len) {
        if s.contains(&row[i..i + run_len]) {
            return true;
        }
    }
    false
}

/// Detects `aaa` plus adjacent repeated blocks like `xyzxyz`.
fn has_repeated_block(password: &str, min_block: usize) -> bool {
    let chars: Vec<char> = password.chars().collect();
    for w in chars.windows(3) {
        if w[0] == w[1] && w[1] == w[2] {
            return true;
        }
    }
    for k in 2..=4usize {
        if k < min_block {
            continue;
        }
        if chars.len() < 2 * k {
            continue;
        }
        for i in 0..=(chars.len() - 2 * k) {
            if chars[i..i + k] == chars[i + k..i + 2 * k] {
                return true;
            }
        }
    }
    false
}

/// Pool-size entropy estimate with penalties for detected structure.
fn estimate_entropy_bits(password: &str, sets: &SetCoverage) -> f64 {
    let mut pool: f64 = 0.0;
    if sets.lower {
        pool += 26.0;
    }
    if sets.upper {
        pool += 26.0;
    }
    if sets.digit {
        pool += 10.0;
    }
    if sets.symbol {
        pool += 33.0; // printable ASCII symbols, roughly
    }
    if pool == 0.0 {
        return 0.0;
    }

    let len = password.chars().count() as f64;
    let mut bits = len * pool.log2();

    if has_sequential_run(password, 4) {
        bits -= 10.0;
    }
    if has_repeated_block(password, 3) {
        bits -= 10.0;
    }
    let alpha_only: String = password
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if !alpha_only.is_empty() && DEFAULT_DICT.contains(&alpha_only.as_str()) {
        bits -= 12.0;
    }

    bits.max(0.0)
}
