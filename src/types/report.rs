//! Report describing a generated clip.
//!
//! A ClipReport is produced for every WAV file written and carries a
//! deterministic digest of the sample stream, so two runs can be compared
//! without diffing the files.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::audio::{samples_to_duration, BITS_PER_SAMPLE, CHANNELS};

/// Summary of one generated WAV asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipReport {
    /// Clip name, e.g. "click" or "win".
    pub name: String,

    /// Path the WAV file was written to.
    pub path: PathBuf,

    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Channel count. Always 1.
    pub channels: u16,

    /// Sample width in bits. Always 16.
    pub bits_per_sample: u16,

    /// Number of samples in the stream.
    pub sample_count: usize,

    /// Clip length in seconds.
    pub duration_sec: f32,

    /// First 16 hex characters of the SHA256 of the little-endian samples.
    pub digest: String,
}

impl ClipReport {
    /// Creates a report for `samples` written to `path`.
    pub fn new(name: impl Into<String>, path: PathBuf, sample_rate: u32, samples: &[i16]) -> Self {
        Self {
            name: name.into(),
            path,
            sample_rate,
            channels: CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_count: samples.len(),
            duration_sec: samples_to_duration(samples.len(), sample_rate),
            digest: compute_sample_digest(samples),
        }
    }

    /// Validates that the report is internally consistent.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.digest.len() != 16 {
            return Some(format!(
                "Digest must be 16 characters, got {}",
                self.digest.len()
            ));
        }

        if !self.digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Some("Digest must contain only hex characters".to_string());
        }

        if self.name.is_empty() {
            return Some("Clip name cannot be empty".to_string());
        }

        let expected = samples_to_duration(self.sample_count, self.sample_rate);
        if (self.duration_sec - expected).abs() > f32::EPSILON {
            return Some(format!(
                "Duration {}s does not match {} samples at {}Hz",
                self.duration_sec, self.sample_count, self.sample_rate
            ));
        }

        None
    }
}

/// Computes a deterministic digest of a sample stream.
///
/// The digest is the first 16 hex characters of the SHA256 hash of the
/// samples encoded as little-endian i16, the same bytes that follow the
/// WAV header on disk.
pub fn compute_sample_digest(samples: &[i16]) -> String {
    let mut hasher = Sha256::new();
    for sample in samples {
        hasher.update(sample.to_le_bytes());
    }
    let result = hasher.finalize();
    // Take first 8 bytes (16 hex chars)
    hex::encode(&result[..8])
}
