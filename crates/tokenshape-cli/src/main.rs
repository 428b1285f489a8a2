use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use tokenshape_core::{
    aliases, detect, input, normalize_config, EngineOptions, NormalizationReport, SchemaVariant,
};
use tracing_subscriber::EnvFilter;

/// Tokenshape - token configuration normalizer CLI
///
/// Detect, normalize, and diagnose loosely structured token configurations.
#[derive(Parser)]
#[command(name = "tokenshape", version, about, long_about = None)]
struct Cli {
    /// Suppress human-readable output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Engine options file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a configuration to canonical fields
    Normalize {
        /// Path to JSON file (`-` for stdin)
        file: PathBuf,
        /// Previously selected standard (e.g. ERC-721)
        #[arg(long)]
        standard: Option<SchemaVariant>,
        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect which token standard a configuration targets
    Detect {
        /// Path to JSON file (`-` for stdin)
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show diagnostics (warnings, field count, complexity)
    Diagnose {
        /// Path to JSON file (`-` for stdin)
        file: PathBuf,
        /// Previously selected standard (e.g. ERC-721)
        #[arg(long)]
        standard: Option<SchemaVariant>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute SHA-256 digest of the normalized configuration
    Hash {
        /// Path to JSON file (`-` for stdin)
        file: PathBuf,
        /// Previously selected standard (e.g. ERC-721)
        #[arg(long)]
        standard: Option<SchemaVariant>,
    },

    /// List supported token standards
    Standards,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            2
        }
    };

    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("TOKENSHAPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_options(cli: &Cli) -> tokenshape_core::Result<EngineOptions> {
    match &cli.config {
        Some(path) => EngineOptions::from_toml_file(path),
        None => Ok(EngineOptions::default()),
    }
}

fn read_source(file: &Path) -> tokenshape_core::Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(file)?)
}

fn run_engine(
    file: &Path,
    options: EngineOptions,
    standard: Option<SchemaVariant>,
) -> tokenshape_core::Result<NormalizationReport> {
    let text = read_source(file)?;
    let options = options.with_preferred_standard(standard);
    let raw = input::parse_raw_config(&text, &options.raw_content_key);
    tracing::debug!(file = %file.display(), "normalizing");
    Ok(normalize_config(&raw, &options))
}

fn run(cli: &Cli) -> tokenshape_core::Result<i32> {
    let options = load_options(cli)?;

    match &cli.command {
        Commands::Normalize {
            file,
            standard,
            json,
        } => {
            let report = run_engine(file, options, *standard)?;
            if *json {
                println!("{}", report.to_json_pretty()?);
            } else {
                let config = serde_json::Value::Object(report.normalized_config.clone());
                println!("{}", serde_json::to_string_pretty(&config)?);
                if !cli.quiet {
                    print_warnings(&report);
                }
            }
            Ok(0)
        }
        Commands::Detect { file, json } => {
            let text = read_source(file)?;
            let raw = input::parse_raw_config(&text, &options.raw_content_key);
            let detection = detect(&raw);
            if *json {
                let output = serde_json::json!({
                    "detected": detection.is_some(),
                    "standard": detection.map(|d| d.variant),
                    "kind": detection.map(|d| d.variant.kind()),
                    "method": detection.map(|d| d.method),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if !cli.quiet {
                match detection {
                    Some(d) => println!(
                        "{} {} ({}) via {}",
                        "✓".green(),
                        d.variant.to_string().bold(),
                        d.variant.kind(),
                        d.method
                    ),
                    None => eprintln!("{} no token standard detected", "✗".red()),
                }
            }
            Ok(if detection.is_some() { 0 } else { 1 })
        }
        Commands::Diagnose {
            file,
            standard,
            json,
        } => {
            let report = run_engine(file, options, *standard)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&report.diagnostics)?);
            } else if !cli.quiet {
                let standard = report
                    .detected_variant
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "undetected".to_string());
                println!("standard:   {}", standard.bold());
                println!("fields:     {}", report.fields_detected());
                println!("complexity: {}", report.diagnostics.structural_complexity);
                print_warnings(&report);
            }
            Ok(0)
        }
        Commands::Hash { file, standard } => {
            let report = run_engine(file, options, *standard)?;
            println!("{}", report.digest());
            Ok(0)
        }
        Commands::Standards => {
            for table in aliases::tables() {
                println!(
                    "{:<9} {:<20} {:>2} scalar, {:>2} structured",
                    table.variant.label().bold(),
                    table.variant.kind(),
                    table.scalar.len(),
                    table.structured.len()
                );
            }
            Ok(0)
        }
        Commands::Version => {
            println!(
                "tokenshape {} (tokenshape-core {})",
                env!("CARGO_PKG_VERSION"),
                tokenshape_core::VERSION
            );
            Ok(0)
        }
    }
}

fn print_warnings(report: &NormalizationReport) {
    for warning in report.warnings() {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
}
