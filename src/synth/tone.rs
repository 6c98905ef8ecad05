//! Decaying sine tone used for the UI click.
//!
//! The envelope falls linearly from 1.0 at the first sample to `1/N` at the
//! last one. It never reaches zero.

use std::f64::consts::PI;

use crate::audio::SAMPLE_RATE;

use super::clip::{AudioClipSpec, Waveform};

/// Click length in seconds.
pub const CLICK_DURATION_SEC: f64 = 0.05;

/// Click tone frequency in Hz.
pub const CLICK_FREQUENCY: f64 = 800.0;

/// Click peak amplitude (full 16-bit scale).
pub const CLICK_PEAK: f64 = 32767.0;

/// A sine tone under a linear decay envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayingTone {
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Amplitude at the first sample.
    pub peak: f64,
}

impl DecayingTone {
    /// Creates a decaying tone.
    pub fn new(frequency: f64, peak: f64) -> Self {
        Self { frequency, peak }
    }

    /// Decay factor `(N - i) / N` for sample `index` of `frame_count`.
    pub fn envelope(index: usize, frame_count: usize) -> f64 {
        let n = frame_count as f64;
        (n - index as f64) / n
    }
}

impl Waveform for DecayingTone {
    fn amplitude(&self, index: usize, frame_count: usize, sample_rate: u32) -> f64 {
        let i = index as f64;
        self.peak
            * (2.0 * PI * self.frequency * i / sample_rate as f64).sin()
            * Self::envelope(index, frame_count)
    }
}

/// The UI click: 800Hz for 50ms at full scale.
pub fn click_clip() -> AudioClipSpec<DecayingTone> {
    AudioClipSpec::new(
        SAMPLE_RATE,
        CLICK_DURATION_SEC,
        DecayingTone::new(CLICK_FREQUENCY, CLICK_PEAK),
    )
}
