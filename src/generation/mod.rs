//! Clip generation module.
//!
//! Provides the click and win generators and the run that writes both.

pub mod pipeline;

// Re-export commonly used items
pub use pipeline::{generate_all, generate_click, generate_clip, generate_win};
