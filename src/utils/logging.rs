use std::time::Instant;
use tracing::{debug, error, info, warn};

pub struct Logger;

impl Logger {
    pub fn init() {
        // Logs go to stderr so piped minifier output stays clean
        tracing_subscriber::fmt()
            .with_env_filter("safetext=info")
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn minify_start(grammar: &str, bytes: usize) {
        debug!("⚡ Minifying {} input ({} bytes)", grammar, bytes);
    }

    pub fn batch_start(root: &str, outdir: &str) {
        info!("🔨 safetext - Batch Minification");
        info!("📁 Input: {}", root);
        info!("📦 Output: {}", outdir);
    }

    pub fn found_files(js_count: usize, css_count: usize) {
        info!("📦 Found {} JS files, {} CSS files", js_count, css_count);
    }

    pub fn file_done(name: &str, reduction: f64) {
        debug!("⚡ Minified: {} ({:.1}% smaller)", name, reduction);
    }

    pub fn batch_complete(files: usize, saved_bytes: usize, elapsed: std::time::Duration) {
        info!("");
        info!("📊 Batch statistics:");
        info!("  • Files minified: {}", files);
        info!("  • Bytes saved: {}", saved_bytes);
        info!("  • Elapsed: {:.2?}", elapsed);
        info!("");
        info!("✅ Batch completed successfully!");
    }

    pub fn bench_entry(name: &str, ops_per_sec: u64) {
        info!("⏱️  {} → {} ops/s", name, ops_per_sec);
    }

    pub fn info(msg: &str) {
        info!("{}", msg);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }

    pub fn error(msg: &str) {
        error!("❌ {}", msg);
    }

    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
