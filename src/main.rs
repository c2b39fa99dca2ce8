//! morfo command-line driver
//!
//! Reads a text file, replaces every recognized word with its dotted
//! morpheme segmentation, and writes the result:
//!
//! ```text
//! morfo --input libro.txt --output libro.morfemoj.txt
//! ```
//!
//! With `--spell` the output is instead the list of unrecognized words,
//! one per line. Exit code 0 on success, 1 on any error (a missing input
//! file included).

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use morfo::{Analyzer, MorfoConfig};

#[derive(Debug, Parser)]
#[command(name = "morfo", version, about = "Esperanto morphological analyzer")]
struct Args {
    /// Input text file (UTF-8; x-notation and ^-notation accepted)
    #[arg(long)]
    input: PathBuf,

    /// Output file for the analyzed text
    #[arg(long)]
    output: PathBuf,

    /// Report misspelled words instead of segmenting
    #[arg(long)]
    spell: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = MorfoConfig::from_env();
    let analyzer = Analyzer::from_config(&config)
        .with_context(|| format!("loading dictionary from {}", config.dictionary_path.display()))?;

    let morpheme_mode = !args.spell;
    let analyzed = analyzer
        .analyze_file(&args.input, morpheme_mode)
        .with_context(|| format!("reading {}", args.input.display()))?;

    fs::write(&args.output, analyzed)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}

fn main() {
    if let Err(e) = morfo::logging::init_logging() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
