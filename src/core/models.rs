use crate::utils::SafeTextError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Source dialect understood by the minification engine.
///
/// The tag is always explicit: picking a grammar by guessing would silently
/// corrupt output, so parsing an unknown tag is a usage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    Js,
    Css,
}

impl Grammar {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some(Grammar::Js),
            "css" => Some(Grammar::Css),
            _ => None,
        }
    }

    /// Extension used for batch pipeline output files
    pub fn min_extension(&self) -> &'static str {
        match self {
            Grammar::Js => "min.js",
            Grammar::Css => "min.css",
        }
    }
}

impl FromStr for Grammar {
    type Err = SafeTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "js" => Ok(Grammar::Js),
            "css" => Ok(Grammar::Css),
            other => Err(SafeTextError::config(format!(
                "unknown grammar '{}', expected 'js' or 'css'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grammar::Js => write!(f, "js"),
            Grammar::Css => write!(f, "css"),
        }
    }
}

/// Size accounting for one minification run
#[derive(Debug, Clone, Serialize)]
pub struct MinifyStats {
    pub original_size: usize,
    pub minified_size: usize,
    pub reduction_percentage: f64,
    pub saved_bytes: usize,
}

impl MinifyStats {
    pub fn measure(original: &str, minified: &str) -> Self {
        let original_size = original.len();
        let minified_size = minified.len();
        let reduction_percentage = if original_size == 0 {
            0.0
        } else {
            ((original_size - minified_size.min(original_size)) as f64 / original_size as f64)
                * 100.0
        };

        Self {
            original_size,
            minified_size,
            reduction_percentage,
            saved_bytes: original_size.saturating_sub(minified_size),
        }
    }
}

impl std::fmt::Display for MinifyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Minification: {:.1}% reduction ({} → {} bytes, saved {})",
            self.reduction_percentage, self.original_size, self.minified_size, self.saved_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_from_str() {
        assert_eq!("js".parse::<Grammar>().unwrap(), Grammar::Js);
        assert_eq!("CSS".parse::<Grammar>().unwrap(), Grammar::Css);
        assert!("html".parse::<Grammar>().is_err());
    }

    #[test]
    fn test_grammar_from_extension() {
        assert_eq!(Grammar::from_extension("mjs"), Some(Grammar::Js));
        assert_eq!(Grammar::from_extension("css"), Some(Grammar::Css));
        assert_eq!(Grammar::from_extension("scss"), None);
    }

    #[test]
    fn test_stats_measure() {
        let stats = MinifyStats::measure("function hello() { }", "function hello(){}");
        assert!(stats.reduction_percentage > 0.0);
        assert_eq!(stats.saved_bytes, 2);
    }

    #[test]
    fn test_stats_empty_input() {
        let stats = MinifyStats::measure("", "");
        assert_eq!(stats.reduction_percentage, 0.0);
    }
}
