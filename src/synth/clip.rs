//! Clip parameters and quantization.

use std::fmt;

/// A waveform evaluated per sample index.
pub trait Waveform {
    /// Returns the unquantized value of sample `index` in a clip of
    /// `frame_count` samples at `sample_rate` Hz.
    fn amplitude(&self, index: usize, frame_count: usize, sample_rate: u32) -> f64;
}

/// Immutable parameters of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClipSpec<W> {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Clip length in seconds.
    pub duration_sec: f64,
    /// Waveform sampled at every frame.
    pub waveform: W,
}

impl<W: Waveform> AudioClipSpec<W> {
    /// Creates a clip spec.
    pub fn new(sample_rate: u32, duration_sec: f64, waveform: W) -> Self {
        Self {
            sample_rate,
            duration_sec,
            waveform,
        }
    }

    /// Number of samples in the clip: `floor(duration × sample_rate)`.
    pub fn frame_count(&self) -> usize {
        (self.duration_sec * self.sample_rate as f64) as usize
    }

    /// Renders the full sample stream in playback order.
    pub fn render(&self) -> Vec<i16> {
        let frame_count = self.frame_count();
        (0..frame_count)
            .map(|i| quantize(self.waveform.amplitude(i, frame_count, self.sample_rate)))
            .collect()
    }
}

impl<W> fmt::Display for AudioClipSpec<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s @ {}Hz", self.duration_sec, self.sample_rate)
    }
}

/// Converts a computed value to a 16-bit sample by truncating toward zero.
///
/// Values beyond the i16 range saturate; NaN maps to 0.
pub fn quantize(value: f64) -> i16 {
    value as i16
}
