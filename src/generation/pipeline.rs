//! Generation pipeline.
//!
//! Renders each clip's sample stream and writes it as a WAV file. The two
//! clips are generated one after the other; the first failure ends the run.

use std::path::Path;

use crate::audio::write_wav;
use crate::config::GeneratorConfig;
use crate::error::{AudioGenError, Result};
use crate::synth::{click_clip, win_clip, AudioClipSpec, Waveform};
use crate::types::ClipReport;

/// Renders `clip` and writes it to `path`.
///
/// # Arguments
///
/// * `name` - Clip name recorded in the report
/// * `clip` - Clip parameters and waveform
/// * `path` - Output WAV path; its directory must exist
pub fn generate_clip<W: Waveform>(
    name: &str,
    clip: &AudioClipSpec<W>,
    path: &Path,
) -> Result<ClipReport> {
    tracing::debug!("Rendering {} ({})", name, clip);
    let samples = clip.render();

    write_wav(&samples, path, clip.sample_rate)?;

    let report = ClipReport::new(name, path.to_path_buf(), clip.sample_rate, &samples);
    tracing::info!(
        "Wrote {} to {} ({} samples, {:.2}s, digest {})",
        name,
        path.display(),
        report.sample_count,
        report.duration_sec,
        report.digest
    );

    Ok(report)
}

/// Generates the UI click sound at `path`.
///
/// # Example
///
/// ```ignore
/// use arcade_audio_gen::generation::generate_click;
///
/// generate_click(Path::new("assets/audio/click.wav"))?;
/// ```
pub fn generate_click(path: &Path) -> Result<ClipReport> {
    generate_clip("click", &click_clip(), path)
}

/// Generates the win jingle at `path`.
pub fn generate_win(path: &Path) -> Result<ClipReport> {
    generate_clip("win", &win_clip(), path)
}

/// Generates the click then the win jingle into the configured directory.
///
/// Returns one report per clip, in generation order. A failure while
/// writing the click aborts the run before the win jingle is attempted.
pub fn generate_all(config: &GeneratorConfig) -> Result<Vec<ClipReport>> {
    if let Some(reason) = config.validate() {
        return Err(AudioGenError::invalid_config(reason));
    }

    tracing::info!("Generating audio assets in {}", config.output_dir.display());

    let click = generate_click(&config.click_path())?;
    let win = generate_win(&config.win_path())?;

    Ok(vec![click, win])
}
