//! arcade-audio-gen: writes the click and win sound effects to disk.
//!
//! With no arguments both clips go to `assets/audio/` under the working
//! directory. The directory must already exist.

use arcade_audio_gen::cli::Cli;
use arcade_audio_gen::error::{AudioGenError, Result};
use arcade_audio_gen::generation::generate_all;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.generator_config();

    let reports = generate_all(&config)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&reports).map_err(AudioGenError::report_failed)?;
        println!("{}", json);
    }

    Ok(())
}
