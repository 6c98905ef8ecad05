//! Cycling arpeggio used for the win jingle.
//!
//! Notes switch abruptly at each boundary with no crossfade, and amplitude
//! stays constant within a note.

use std::f64::consts::PI;

use crate::audio::SAMPLE_RATE;

use super::clip::{AudioClipSpec, Waveform};

/// Win jingle length in seconds.
pub const WIN_DURATION_SEC: f64 = 1.5;

/// A major arpeggio: A4, C#5, E5, A5 (Hz).
pub const WIN_NOTES: [f64; 4] = [440.0, 554.0, 659.0, 880.0];

/// Note changes per second.
pub const WIN_NOTES_PER_SECOND: f64 = 4.0;

/// Win jingle amplitude.
pub const WIN_PEAK: f64 = 10000.0;

/// A constant-amplitude sine stepping through a note table.
#[derive(Debug, Clone, PartialEq)]
pub struct Arpeggio {
    /// Note frequencies in Hz, played in order and repeated.
    pub notes: Vec<f64>,
    /// Note changes per second.
    pub notes_per_second: f64,
    /// Constant amplitude.
    pub peak: f64,
}

impl Arpeggio {
    /// Creates an arpeggio over `notes`.
    pub fn new(notes: impl Into<Vec<f64>>, notes_per_second: f64, peak: f64) -> Self {
        Self {
            notes: notes.into(),
            notes_per_second,
            peak,
        }
    }

    /// Returns the frequency sounding at `t` seconds, or None for an empty table.
    pub fn note_at(&self, t: f64) -> Option<f64> {
        if self.notes.is_empty() {
            return None;
        }
        let step = (t * self.notes_per_second) as usize;
        Some(self.notes[step % self.notes.len()])
    }
}

impl Waveform for Arpeggio {
    fn amplitude(&self, index: usize, _frame_count: usize, sample_rate: u32) -> f64 {
        let t = index as f64 / sample_rate as f64;
        match self.note_at(t) {
            Some(freq) => self.peak * (2.0 * PI * freq * t).sin(),
            None => 0.0,
        }
    }
}

/// The win jingle: 1.5s of the A major arpeggio at four notes per second.
pub fn win_clip() -> AudioClipSpec<Arpeggio> {
    AudioClipSpec::new(
        SAMPLE_RATE,
        WIN_DURATION_SEC,
        Arpeggio::new(WIN_NOTES, WIN_NOTES_PER_SECOND, WIN_PEAK),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_has_66150_samples() {
        let clip = win_clip();
        assert_eq!(clip.frame_count(), 66150);
        assert_eq!(clip.render().len(), 66150);
    }

    #[test]
    fn note_boundaries() {
        let arp = win_clip().waveform;
        assert_eq!(arp.note_at(0.0), Some(440.0));
        assert_eq!(arp.note_at(0.2499), Some(440.0));
        assert_eq!(arp.note_at(0.25), Some(554.0));
        assert_eq!(arp.note_at(0.4999), Some(554.0));
        assert_eq!(arp.note_at(0.5), Some(659.0));
        assert_eq!(arp.note_at(0.75), Some(880.0));
        assert_eq!(arp.note_at(0.9999), Some(880.0));
        // Pattern repeats every second
        assert_eq!(arp.note_at(1.0), Some(440.0));
        assert_eq!(arp.note_at(1.25), Some(554.0));
        assert_eq!(arp.note_at(1.4999), Some(554.0));
    }

    #[test]
    fn win_matches_golden_values() {
        let samples = win_clip().render();

        assert_eq!(&samples[..4], &[0, 626, 1250, 1869]);
        // First samples after each note boundary
        assert_eq!(samples[11026], -788);
        assert_eq!(samples[22051], -937);
        assert_eq!(samples[33076], 1250);
        assert_eq!(samples[44101], 626);
        assert_eq!(samples[66149], -788);
    }

    #[test]
    fn win_samples_within_peak() {
        let samples = win_clip().render();
        assert!(samples.iter().all(|&s| (-10000..=10000).contains(&s)));
        assert!(samples.iter().any(|&s| s > 9900));
        assert!(samples.iter().any(|&s| s < -9900));
    }

    #[test]
    fn empty_note_table_is_silent() {
        let clip = AudioClipSpec::new(8000, 0.01, Arpeggio::new(Vec::<f64>::new(), 4.0, 1000.0));
        assert_eq!(clip.render(), vec![0; 80]);
    }

    #[test]
    fn win_render_is_deterministic() {
        assert_eq!(win_clip().render(), win_clip().render());
    }
}
