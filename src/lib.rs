//! arcade-audio-gen: synthesizes the arcade UI sound effects as WAV assets.
//!
//! Two clips are produced, both mono 16-bit PCM at 44.1kHz:
//! - `click.wav`: 50ms 800Hz sine with a linear decay
//! - `win.wav`: 1.5s A major arpeggio, four notes per second
//!
//! # Modules
//!
//! - [`synth`]: Clip parameters, waveforms and quantization
//! - [`audio`]: WAV writing
//! - [`generation`]: The click and win generators
//! - [`config`]: Output locations (GeneratorConfig)
//! - [`error`]: Error types and codes (AudioGenError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use arcade_audio_gen::{generate_all, GeneratorConfig};
//!
//! let reports = generate_all(&GeneratorConfig::default())?;
//! for report in &reports {
//!     println!("{} -> {}", report.name, report.path.display());
//! }
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod synth;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::GeneratorConfig;
pub use error::{AudioGenError, ErrorCode, Result};
pub use generation::{generate_all, generate_click, generate_win};
pub use types::ClipReport;
