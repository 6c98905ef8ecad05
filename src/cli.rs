//! Command-line argument parser.
//!
//! Running with no arguments writes both clips into `assets/audio`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GeneratorConfig;

/// arcade-audio-gen: synthesizes the click and win sound effects
#[derive(Parser, Debug)]
#[command(name = "arcade-audio-gen")]
#[command(about = "Synthesizes the arcade UI click and win jingle as WAV files")]
#[command(version)]
pub struct Cli {
    /// Existing directory to write click.wav and win.wav into (default: assets/audio)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Print a JSON report of the generated clips to stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Builds the output configuration for this invocation.
    pub fn generator_config(&self) -> GeneratorConfig {
        match self.out_dir {
            Some(ref dir) => GeneratorConfig::with_output_dir(dir.clone()),
            None => GeneratorConfig::default(),
        }
    }
}
