//! Output configuration.
//!
//! Controls where the generated clips are written. Clip parameters
//! themselves are fixed and not configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/audio";

/// Default file name for the click sound.
pub const DEFAULT_CLICK_FILE: &str = "click.wav";

/// Default file name for the win jingle.
pub const DEFAULT_WIN_FILE: &str = "win.wav";

/// Output locations for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory both clips are written into. Must already exist.
    pub output_dir: PathBuf,

    /// File name of the click sound inside `output_dir`.
    pub click_file: String,

    /// File name of the win jingle inside `output_dir`.
    pub win_file: String,
}

impl GeneratorConfig {
    /// Creates a GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a GeneratorConfig writing into `output_dir` with default file names.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Returns the full path of the click sound.
    pub fn click_path(&self) -> PathBuf {
        self.output_dir.join(&self.click_file)
    }

    /// Returns the full path of the win jingle.
    pub fn win_path(&self) -> PathBuf {
        self.output_dir.join(&self.win_file)
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        for (label, file) in [("click", &self.click_file), ("win", &self.win_file)] {
            if let Some(reason) = validate_file_name(file) {
                return Some(format!("{} file {:?}: {}", label, file, reason));
            }
        }

        if self.click_file == self.win_file {
            return Some(format!(
                "click and win files must differ, both are {:?}",
                self.click_file
            ));
        }

        None
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            click_file: DEFAULT_CLICK_FILE.to_string(),
            win_file: DEFAULT_WIN_FILE.to_string(),
        }
    }
}

fn validate_file_name(file: &str) -> Option<&'static str> {
    if file.is_empty() {
        return Some("file name cannot be empty");
    }

    // Must be a bare file name so both clips land in output_dir
    if Path::new(file).file_name().and_then(|n| n.to_str()) != Some(file) {
        return Some("must be a plain file name");
    }

    if !file.to_ascii_lowercase().ends_with(".wav") {
        return Some("must end in .wav");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let config = GeneratorConfig::new();
        assert_eq!(config.click_path(), PathBuf::from("assets/audio/click.wav"));
        assert_eq!(config.win_path(), PathBuf::from("assets/audio/win.wav"));
        assert!(config.validate().is_none());
    }

    #[test]
    fn custom_output_dir() {
        let config = GeneratorConfig::with_output_dir("/tmp/sfx");
        assert_eq!(config.click_path(), PathBuf::from("/tmp/sfx/click.wav"));
        assert_eq!(config.win_path(), PathBuf::from("/tmp/sfx/win.wav"));
    }

    #[test]
    fn config_validation() {
        let mut config = GeneratorConfig::new();

        config.click_file = String::new();
        assert!(config.validate().is_some());

        config.click_file = "click.mp3".to_string();
        assert!(config.validate().is_some());

        config.click_file = "sub/click.wav".to_string();
        assert!(config.validate().is_some());

        config.click_file = "win.wav".to_string();
        assert!(config.validate().is_some());

        config.click_file = "CLICK.WAV".to_string();
        assert!(config.validate().is_none());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GeneratorConfig::with_output_dir("out");
        let json = serde_json::to_string(&config).unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
