//! Error types for the audio asset generator.
//!
//! Defines the error codes and the error type used throughout the crate
//! for consistent error handling and reporting.

use std::fmt;

/// Error codes identifying why a generation run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Destination directory does not exist.
    /// Trigger: Parent directory of an output path is missing.
    OutputDirMissing,

    /// Failed to create the WAV file.
    /// Trigger: Destination not writable, or a directory sits at the path.
    WavCreateFailed,

    /// Failed to write sample data.
    /// Trigger: Disk full or I/O error mid-write.
    WavWriteFailed,

    /// Failed to finalize the WAV header.
    /// Trigger: I/O error while seeking back to patch chunk sizes.
    WavFinalizeFailed,

    /// Output configuration is invalid.
    /// Trigger: Empty, non-.wav or clashing output file names.
    InvalidConfig,

    /// Failed to serialize the clip reports.
    ReportFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirMissing => "OUTPUT_DIR_MISSING",
            ErrorCode::WavCreateFailed => "WAV_CREATE_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::WavFinalizeFailed => "WAV_FINALIZE_FAILED",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::ReportFailed => "REPORT_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirMissing => "Output directory does not exist",
            ErrorCode::WavCreateFailed => "Failed to create WAV file",
            ErrorCode::WavWriteFailed => "Failed to write WAV sample data",
            ErrorCode::WavFinalizeFailed => "Failed to finalize WAV file",
            ErrorCode::InvalidConfig => "Output configuration is invalid",
            ErrorCode::ReportFailed => "Failed to serialize clip reports",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirMissing => {
                "Create the output directory first (e.g., mkdir -p assets/audio) \
                 or pass an existing directory with --out-dir"
            }
            ErrorCode::WavCreateFailed => {
                "Check write permissions on the output directory and that no directory \
                 exists at the target file path"
            }
            ErrorCode::WavWriteFailed | ErrorCode::WavFinalizeFailed => {
                "Check available disk space and rerun; the partially written file should be discarded"
            }
            ErrorCode::InvalidConfig => {
                "Use distinct, non-empty file names ending in .wav (e.g., click.wav, win.wav)"
            }
            ErrorCode::ReportFailed => "Rerun without --json to skip the report",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generation runs.
#[derive(Debug)]
pub struct AudioGenError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AudioGenError {
    /// Creates a new AudioGenError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new AudioGenError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an OUTPUT_DIR_MISSING error.
    pub fn output_dir_missing(dir: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::OutputDirMissing,
            format!("Output directory does not exist: {}", dir.into()),
        )
    }

    /// Creates a WAV_CREATE_FAILED error.
    pub fn wav_create_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::WavCreateFailed,
            format!("Failed to create WAV file {}", path.into()),
            source,
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_source(ErrorCode::WavWriteFailed, "Failed to write sample", source)
    }

    /// Creates a WAV_FINALIZE_FAILED error.
    pub fn wav_finalize_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_source(
            ErrorCode::WavFinalizeFailed,
            "Failed to finalize WAV file",
            source,
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfig,
            format!("Invalid configuration: {}", reason.into()),
        )
    }

    /// Creates a REPORT_FAILED error.
    pub fn report_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_source(
            ErrorCode::ReportFailed,
            "Failed to serialize clip reports",
            source,
        )
    }
}

impl fmt::Display for AudioGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for AudioGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using AudioGenError.
pub type Result<T> = std::result::Result<T, AudioGenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::OutputDirMissing.as_str(), "OUTPUT_DIR_MISSING");
        assert_eq!(ErrorCode::WavCreateFailed.as_str(), "WAV_CREATE_FAILED");
        assert_eq!(ErrorCode::WavWriteFailed.as_str(), "WAV_WRITE_FAILED");
        assert_eq!(ErrorCode::WavFinalizeFailed.as_str(), "WAV_FINALIZE_FAILED");
        assert_eq!(ErrorCode::InvalidConfig.as_str(), "INVALID_CONFIG");
        assert_eq!(ErrorCode::ReportFailed.as_str(), "REPORT_FAILED");
    }

    #[test]
    fn error_code_recovery_hints_not_empty() {
        for code in [
            ErrorCode::OutputDirMissing,
            ErrorCode::WavCreateFailed,
            ErrorCode::WavWriteFailed,
            ErrorCode::WavFinalizeFailed,
            ErrorCode::InvalidConfig,
            ErrorCode::ReportFailed,
        ] {
            assert!(!code.recovery_hint().is_empty());
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn error_display() {
        let err = AudioGenError::output_dir_missing("assets/audio");
        assert!(err.to_string().contains("OUTPUT_DIR_MISSING"));
        assert!(err.to_string().contains("assets/audio"));
        assert!(err.to_string().contains("Recovery:"));
    }

    #[test]
    fn error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AudioGenError::wav_create_failed("click.wav", io);
        assert_eq!(err.code, ErrorCode::WavCreateFailed);
        assert!(err.source().is_some());

        let err = AudioGenError::invalid_config("empty file name");
        assert!(err.source().is_none());
    }
}
