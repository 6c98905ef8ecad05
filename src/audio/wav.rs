//! WAV file writer for synthesized clips.
//!
//! Writes signed 16-bit samples as mono PCM using the hound crate.

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{AudioGenError, Result};

/// Sample rate shared by every generated clip (44.1kHz).
pub const SAMPLE_RATE: u32 = 44100;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Sample width in bits.
pub const BITS_PER_SAMPLE: u16 = 16;

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes samples to a WAV file, replacing any existing file.
///
/// The parent directory must already exist. It is never created here, and
/// when it is missing no file is written.
///
/// # Example
///
/// ```ignore
/// use arcade_audio_gen::audio::write_wav;
///
/// let samples = vec![0i16, 1000, -1000, 0];
/// write_wav(&samples, Path::new("assets/audio/test.wav"), 44100)?;
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(AudioGenError::output_dir_missing(
                parent.display().to_string(),
            ));
        }
    }

    let writer = WavWriter::create(path, wav_spec(sample_rate))
        .map_err(|e| AudioGenError::wav_create_failed(path.display().to_string(), e))?;

    write_samples(writer, samples)
}

/// Writes samples to an in-memory WAV buffer.
///
/// Returns exactly the bytes [`write_wav`] would put on disk.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());

    let writer = WavWriter::new(&mut cursor, wav_spec(sample_rate))
        .map_err(|e| AudioGenError::wav_create_failed("<memory>", e))?;
    write_samples(writer, samples)?;

    Ok(cursor.into_inner())
}

fn write_samples<W: Write + Seek>(mut writer: WavWriter<W>, samples: &[i16]) -> Result<()> {
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(AudioGenError::wav_write_failed)?;
    }

    writer
        .finalize()
        .map_err(AudioGenError::wav_finalize_failed)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}
