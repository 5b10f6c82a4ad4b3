use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use distortion_guard::{classify_basic, detect, validate_input, Config, CBT_DISTORTIONS};

#[derive(Parser)]
#[command(
    name = "distortion-guard",
    about = "Detect cognitive-distortion patterns and score objectivity in short text",
    version
)]
struct Cli {
    /// Maximum accepted text length in characters (defaults to $MAX_TEXT_LENGTH, then 2000)
    #[arg(long, global = true)]
    max_length: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List named distortions found in each input
    Detect {
        /// File paths to analyze (reads stdin if none provided)
        files: Vec<String>,
    },
    /// Score each input for objectivity and all-or-nothing framing
    Classify {
        /// File paths to analyze (reads stdin if none provided)
        files: Vec<String>,
    },
    /// Print the distortion catalog
    Taxonomy,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("distortion_guard=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.max_length {
        Some(n) => Config::new(n)?,
        None => Config::from_env()?,
    };

    match cli.command {
        Commands::Detect { files } => run(&files, &config, detect),
        Commands::Classify { files } => run(&files, &config, classify_basic),
        Commands::Taxonomy => print_json(&CBT_DISTORTIONS),
    }
}

fn run<T, F>(files: &[String], config: &Config, analyze: F) -> Result<()>
where
    T: Serialize,
    F: Fn(&str) -> T,
{
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return analyze_one("<stdin>", &input, config, &analyze);
    }
    for path in files {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
        analyze_one(path, &text, config, &analyze)?;
    }
    Ok(())
}

fn analyze_one<T, F>(label: &str, raw: &str, config: &Config, analyze: &F) -> Result<()>
where
    T: Serialize,
    F: Fn(&str) -> T,
{
    let text = match validate_input(raw, config) {
        Ok(text) => text,
        Err(e) => {
            warn!(input = label, error = %e, "rejected input");
            return Err(e).with_context(|| format!("invalid input from {label}"));
        }
    };
    info!(input = label, chars = text.chars().count(), "analyzing");
    print_json(&analyze(text))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
