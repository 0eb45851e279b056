//! JSON validation with structural safety limits: size, nesting depth, total
//! key count, string length, and blocked key names.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct JsonOptions {
    pub max_bytes: usize,
    pub max_depth: usize,
    pub max_keys: usize,
    pub max_string_length: usize,
    pub block_keys: Vec<String>,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            max_bytes: 1_000_000,
            max_depth: 32,
            max_keys: 50_000,
            max_string_length: 100_000,
            block_keys: vec![
                "__proto__".to_string(),
                "constructor".to_string(),
                "prototype".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub ok: bool,
    pub issues: Vec<String>,
    pub bytes: usize,
    pub depth: usize,
    pub keys: usize,
}

pub fn is_json_safe(raw: &str) -> JsonReport {
    is_json_safe_with(raw, &JsonOptions::default())
}

pub fn is_json_safe_with(raw: &str, opts: &JsonOptions) -> JsonReport {
    let bytes = raw.len();
    if raw.trim().is_empty() {
        return JsonReport {
            ok: false,
            issues: vec!["empty".into()],
            bytes,
            depth: 0,
            keys: 0,
        };
    }

    let mut issues: Vec<String> = Vec::new();
    if bytes > opts.max_bytes {
        issues.push("too_large".into());
    }

    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => {
            issues.push("parse_error".into());
            return JsonReport {
                ok: false,
                issues,
                bytes,
                depth: 0,
                keys: 0,
            };
        }
    };

    let (depth, keys) = analyze(&value, opts, &mut issues);

    issues.sort();
    issues.dedup();
    JsonReport {
        ok: issues.is_empty(),
        issues,
        bytes,
        depth,
        keys,
    }
}

/// Iterative walk measuring depth and key count while enforcing limits.
fn analyze(root: &Value, opts: &JsonOptions, issues: &mut Vec<String>) -> (usize, usize) {
    let mut max_depth = 0;
    let mut key_count = 0;

    let mut stack: Vec<(&Value, usize)> = vec![(root, 0)];
    while let Some((value, depth)) = stack.pop() {
        if depth > max_depth {
            max_depth = depth;
        }
        if depth > opts.max_depth {
            issues.push("too_deep".into());
            break;
        }

        match value {
            Value::String(s) => {
                if s.len() > opts.max_string_length {
                    issues.push("string_too_long".into());
                    break;
                }
            }
            Value::Array(items) => {
                for item in items {
                    stack.push((item, depth + 1));
                }
            }
            Value::Object(map) => {
                key_count += map.len();
                if key_count > opts.max_keys {
                    issues.push("too_many_keys".into());
                    break;
                }
                for (key, item) in map {
                    if opts.block_keys.iter().any(|b| b == key) {
                        issues.push(format!("blocked_key:{}", key));
                    }
                    stack.push((item, depth + 1));
                }
            }
            _ => {}
        }
    }

    (max_depth, key_count)
}

/// Re-serialize compactly; empty string on parse error.
pub fn normalize_json(raw: &str) -> String {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|v| serde_json::to_string(&v).ok())
        .unwrap_or_default()
}
