use crate::core::validators::{is_e164, is_email, is_iban_safe, is_url_safe, validate_card};
use crate::core::{minify, Grammar};
use crate::utils::Logger;
use serde::Serialize;
use std::time::Instant;

/// One measured operation.
#[derive(Debug, Clone, Serialize)]
pub struct BenchEntry {
    pub name: &'static str,
    pub ops_per_sec: u64,
}

/// shields.io endpoint badge payload.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    #[serde(rename = "schemaVersion")]
    pub schema_version: u32,
    pub label: String,
    pub message: String,
    pub color: &'static str,
}

impl Badge {
    pub fn from_entry(entry: &BenchEntry) -> Self {
        Self {
            schema_version: 1,
            label: entry.name.to_string(),
            message: format!("{} ops/s", format_ops(entry.ops_per_sec)),
            color: "informational",
        }
    }
}

fn format_ops(ops: u64) -> String {
    if ops >= 1_000_000 {
        format!("{:.1}M", ops as f64 / 1_000_000.0)
    } else if ops >= 1_000 {
        format!("{:.1}k", ops as f64 / 1_000.0)
    } else {
        ops.to_string()
    }
}

/// Fixed-iteration throughput harness with a warmup phase.
pub struct BenchHarness {
    pub iterations: u32,
    pub warmup: u32,
}

impl Default for BenchHarness {
    fn default() -> Self {
        Self {
            iterations: 1000,
            warmup: 100,
        }
    }
}

const JS_SAMPLE: &str = "function x() { return 1; } // sample\nlet value = x() / 2;\n";
const CSS_SAMPLE: &str = "/* sample */\na {\n  color: red;\n  margin: 0;\n}\n";

impl BenchHarness {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            warmup: (iterations / 10).max(1),
        }
    }

    pub fn measure<F: FnMut()>(&self, name: &'static str, mut op: F) -> BenchEntry {
        for _ in 0..self.warmup {
            op();
        }
        let start = Instant::now();
        for _ in 0..self.iterations {
            op();
        }
        let elapsed = start.elapsed().as_secs_f64();
        let ops_per_sec = if elapsed > 0.0 {
            (self.iterations as f64 / elapsed).round() as u64
        } else {
            0
        };
        let entry = BenchEntry { name, ops_per_sec };
        Logger::bench_entry(name, ops_per_sec);
        entry
    }

    pub fn run_all(&self) -> Vec<BenchEntry> {
        vec![
            self.measure("minify-js", || {
                std::hint::black_box(minify(JS_SAMPLE, Grammar::Js));
            }),
            self.measure("minify-css", || {
                std::hint::black_box(minify(CSS_SAMPLE, Grammar::Css));
            }),
            self.measure("url", || {
                std::hint::black_box(is_url_safe("https://example.com/path?q=1"));
            }),
            self.measure("email", || {
                std::hint::black_box(is_email("user@example.com"));
            }),
            self.measure("iban", || {
                std::hint::black_box(is_iban_safe("DE89370400440532013000"));
            }),
            self.measure("phone", || {
                std::hint::black_box(is_e164("+12025550123"));
            }),
            self.measure("card", || {
                std::hint::black_box(validate_card("4111111111111111"));
            }),
        ]
    }
}
