use crate::core::models::Grammar;
use crate::core::validators::*;
use crate::infrastructure::{Badge, BatchPipeline, BenchHarness, MinifyService};
use crate::utils::{Logger, Result, SafeTextError};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[derive(Parser)]
#[command(name = "safetext")]
#[command(about = "safetext - fast single-pass minification and input validation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Minify a single JS or CSS source
    Minify {
        /// Source grammar: js or css
        grammar: String,
        /// Input file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Minify every JS/CSS file under a directory
    Batch {
        /// Root directory
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        outdir: String,
    },
    /// Run one validator against a value and print its report
    Check {
        /// Validator name: email, card, iban, ip, json, password, phone, tin, url, vat
        validator: String,
        /// Value to validate
        value: String,
    },
    /// Measure minifier and validator throughput
    Bench {
        /// Iterations per operation
        #[arg(short, long, default_value_t = 1000)]
        iterations: u32,
        /// Emit shields.io badge JSON instead of the human summary
        #[arg(long)]
        badge: bool,
    },
    /// Show version and supported grammars
    Info,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        // Initialize logging
        Logger::init();

        let cli = Cli::parse();

        match cli.command {
            Commands::Minify {
                grammar,
                input,
                output,
            } => self.handle_minify(&grammar, input, output).await,
            Commands::Batch { root, outdir } => self.handle_batch(&root, &outdir).await,
            Commands::Check { validator, value } => self.handle_check(&validator, &value),
            Commands::Bench { iterations, badge } => self.handle_bench(iterations, badge),
            Commands::Info => self.handle_info(),
        }
    }

    async fn handle_minify(
        &self,
        grammar: &str,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let grammar: Grammar = grammar.parse()?;

        let source = match &input {
            Some(path) => tokio::fs::read_to_string(path).await?,
            None => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            }
        };

        let service = MinifyService::new();
        let minified = service.minify_source(source.clone(), grammar).await?;
        let stats = service.stats(&source, &minified);

        match &output {
            Some(path) => {
                tokio::fs::write(path, &minified).await?;
                Logger::info(&format!("📦 Wrote {}", path.display()));
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(minified.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }
        Logger::info(&stats.to_string());
        Ok(())
    }

    async fn handle_batch(&self, root: &str, outdir: &str) -> Result<()> {
        let result = BatchPipeline::new(root, outdir).run().await?;
        println!(
            "{} {} files minified, {} bytes saved in {:.2?}",
            "✅".green(),
            result.outputs.len(),
            result.total_saved,
            result.elapsed
        );
        Ok(())
    }

    fn handle_check(&self, validator: &str, value: &str) -> Result<()> {
        let report = match validator.to_lowercase().as_str() {
            "email" => serde_json::json!({
                "ok": is_email(value),
                "normalized": normalize_email(value),
            }),
            "card" => serde_json::to_value(validate_card(value))?,
            "iban" => serde_json::to_value(is_iban_safe(value))?,
            "ip" => serde_json::to_value(is_ip_safe(value))?,
            "json" => serde_json::to_value(is_json_safe(value))?,
            "password" => serde_json::to_value(validate_password(value))?,
            "phone" => serde_json::json!({
                "ok": validate_optional_e164(value),
                "normalized": normalize_phone(value),
            }),
            "tin" => serde_json::to_value(validate_tin(value))?,
            "url" => serde_json::json!({
                "ok": is_url_safe(value),
                "normalized": normalize_url(value),
            }),
            "vat" => serde_json::to_value(is_vat_safe(value))?,
            other => {
                return Err(SafeTextError::config(format!(
                    "unknown validator '{}'",
                    other
                )))
            }
        };

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }

    fn handle_bench(&self, iterations: u32, badge: bool) -> Result<()> {
        let harness = BenchHarness::new(iterations);
        let entries = harness.run_all();

        if badge {
            let badges: Vec<Badge> = entries.iter().map(Badge::from_entry).collect();
            println!("{}", serde_json::to_string_pretty(&badges)?);
        } else {
            println!("{}", "📊 Benchmark results".bold());
            for entry in &entries {
                println!("  {} {} ops/s", entry.name.cyan(), entry.ops_per_sec);
            }
        }
        Ok(())
    }

    fn handle_info(&self) -> Result<()> {
        println!("{} v{}", "safetext".bold().cyan(), env!("CARGO_PKG_VERSION"));
        println!("Grammars: js, css");
        println!("Validators: email, card, iban, ip, json, password, phone, tin, url, vat");
        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_unknown_validator_is_usage_error() {
        let handler = CliHandler::new();
        let err = handler.handle_check("nope", "value").unwrap_err();
        assert!(matches!(err, SafeTextError::Config(_)));
        assert!(err.to_string().contains("unknown validator 'nope'"));
    }

    #[test]
    fn test_check_dispatches_every_validator_name() {
        let handler = CliHandler::new();
        for name in [
            "email", "card", "iban", "ip", "json", "password", "phone", "tin", "url", "vat",
        ] {
            assert!(handler.handle_check(name, "sample").is_ok(), "{}", name);
        }
        // dispatch is case-insensitive
        assert!(handler.handle_check("Email", "a@b.co").is_ok());
    }
}
