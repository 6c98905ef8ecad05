//! Core types for the audio asset generator.
//!
//! - [`ClipReport`]: Summary of one generated WAV asset

mod report;

pub use report::{compute_sample_digest, ClipReport};
