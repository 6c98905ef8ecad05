//! Waveform synthesis.
//!
//! Pure sample computation for the two arcade sound effects:
//! - [`DecayingTone`]: the UI click, a sine with a linear decay envelope
//! - [`Arpeggio`]: the win jingle, a four-note cycling sine sequence

pub mod arpeggio;
pub mod clip;
pub mod tone;

// Re-export commonly used items
pub use arpeggio::{
    win_clip, Arpeggio, WIN_DURATION_SEC, WIN_NOTES, WIN_NOTES_PER_SECOND, WIN_PEAK,
};
pub use clip::{quantize, AudioClipSpec, Waveform};
pub use tone::{click_clip, DecayingTone, CLICK_DURATION_SEC, CLICK_FREQUENCY, CLICK_PEAK};
