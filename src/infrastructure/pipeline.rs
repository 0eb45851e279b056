use crate::core::{minify, Grammar, MinifyStats};
use crate::utils::{Logger, Result, SafeTextError, Timer};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Async wrapper around the minifier for use in the CLI pipeline.
pub struct MinifyService;

impl MinifyService {
    pub fn new() -> Self {
        Self
    }

    /// Minify a source string asynchronously. The scanner is CPU-bound, so
    /// large inputs run on a blocking task.
    pub async fn minify_source(&self, source: String, grammar: Grammar) -> Result<String> {
        Logger::minify_start(&grammar.to_string(), source.len());
        tokio::task::spawn_blocking(move || minify(&source, grammar))
            .await
            .map_err(|e| SafeTextError::other(format!("minify task failed: {}", e)))
    }

    pub fn stats(&self, original: &str, minified: &str) -> MinifyStats {
        MinifyStats::measure(original, minified)
    }
}

impl Default for MinifyService {
    fn default() -> Self {
        Self::new()
    }
}

/// One minified file produced by a batch run.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: MinifyStats,
}

/// Aggregate result of a batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub outputs: Vec<BatchOutput>,
    pub total_saved: usize,
    pub elapsed: std::time::Duration,
}

/// Walks a source tree, minifies every JS and CSS file, and writes the
/// results as `<stem>.min.<ext>` under the output directory.
pub struct BatchPipeline {
    root: PathBuf,
    outdir: PathBuf,
}

impl BatchPipeline {
    pub fn new(root: impl Into<PathBuf>, outdir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outdir: outdir.into(),
        }
    }

    pub async fn run(&self) -> Result<BatchResult> {
        let timer = Timer::start("batch minification");
        Logger::batch_start(&self.root.display().to_string(), &self.outdir.display().to_string());

        let sources = scan_sources(&self.root).await?;
        let js_count = sources.iter().filter(|(_, g)| *g == Grammar::Js).count();
        Logger::found_files(js_count, sources.len() - js_count);

        let mut jobs = Vec::with_capacity(sources.len());
        for (path, grammar) in sources {
            let content = fs::read_to_string(&path).await?;
            jobs.push((path, grammar, content));
        }

        // One blocking task fanning out over rayon, the same shape the
        // per-file work takes in larger builds
        let minified: Vec<(PathBuf, Grammar, String, String)> =
            tokio::task::spawn_blocking(move || {
                use rayon::prelude::*;
                jobs.into_par_iter()
                    .map(|(path, grammar, content)| {
                        let out = minify(&content, grammar);
                        (path, grammar, content, out)
                    })
                    .collect()
            })
            .await
            .map_err(|e| SafeTextError::other(format!("batch task failed: {}", e)))?;

        fs::create_dir_all(&self.outdir).await?;

        let mut outputs = Vec::with_capacity(minified.len());
        let mut total_saved = 0usize;
        for (path, grammar, original, min) in minified {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| SafeTextError::other(format!("bad file name: {}", path.display())))?;
            let out_path = self.outdir.join(format!("{}.{}", stem, grammar.min_extension()));
            fs::write(&out_path, &min).await?;

            let stats = MinifyStats::measure(&original, &min);
            Logger::file_done(stem, stats.reduction_percentage);
            total_saved += stats.saved_bytes;
            outputs.push(BatchOutput {
                input: path,
                output: out_path,
                stats,
            });
        }

        let elapsed = timer.elapsed();
        Logger::batch_complete(outputs.len(), total_saved, elapsed);
        Ok(BatchResult {
            outputs,
            total_saved,
            elapsed,
        })
    }
}

/// Recursively collect minifiable sources, skipping dotfiles, node_modules
/// and anything already minified.
pub async fn scan_sources(root: &Path) -> Result<Vec<(PathBuf, Grammar)>> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') || name == "node_modules" {
                continue;
            }
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            if name.ends_with(".min.js") || name.ends_with(".min.css") {
                continue;
            }
            let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
            if let Some(grammar) = Grammar::from_extension(ext) {
                found.push((path, grammar));
            }
        }
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_minify_service() {
        let service = MinifyService::new();
        let out = service
            .minify_source("let  x = 1 ;  // note\n".to_string(), Grammar::Js)
            .await
            .unwrap();
        assert_eq!(out, "let x=1;");
    }

    #[tokio::test]
    async fn test_scan_skips_minified_and_hidden() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("app.js"), "let a = 1;").unwrap();
        std::fs::write(dir.path().join("app.min.js"), "let a=1;").unwrap();
        std::fs::write(dir.path().join(".hidden.js"), "x").unwrap();
        std::fs::write(dir.path().join("style.css"), "a { }").unwrap();
        std::fs::create_dir(dir.path().join("node_modules")).unwrap();
        std::fs::write(dir.path().join("node_modules").join("dep.js"), "x").unwrap();

        let sources = scan_sources(dir.path()).await.unwrap();
        let names: Vec<String> = sources
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["app.js", "style.css"]);
    }

    #[tokio::test]
    async fn test_batch_run_writes_outputs() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir(&src).unwrap();
        std::fs::write(src.join("app.js"), "function f() { return 1; }\n").unwrap();
        std::fs::write(src.join("style.css"), "a {\n  color: red;\n}\n").unwrap();

        let outdir = dir.path().join("dist");
        let result = BatchPipeline::new(&src, &outdir).run().await.unwrap();

        assert_eq!(result.outputs.len(), 2);
        let js = std::fs::read_to_string(outdir.join("app.min.js")).unwrap();
        assert_eq!(js, "function f(){return 1;}");
        let css = std::fs::read_to_string(outdir.join("style.min.css")).unwrap();
        assert_eq!(css, "a{color:red}");
        assert!(result.total_saved > 0);
    }
}
