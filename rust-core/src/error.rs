//! Error types for the spectral engine

use thiserror::Error;

/// Errors reported by windowing, planning, and spectrum queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DspError {
    #[error("FFT transform size must be positive")]
    ZeroTransformSize,

    #[error("Buffer length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Window of width {width} at offset {offset} does not fit in {window_length} samples")]
    InvalidWindow {
        width: usize,
        offset: usize,
        window_length: usize,
    },

    #[error("FFT processing failed: {0}")]
    Transform(String),
}

pub type Result<T> = std::result::Result<T, DspError>;

impl DspError {
    /// Check that a buffer has exactly the length an operation requires
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(DspError::LengthMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert!(DspError::check_len(4, 4).is_ok());
        assert_eq!(
            DspError::check_len(4, 3),
            Err(DspError::LengthMismatch { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn test_messages() {
        let err = DspError::LengthMismatch { expected: 8, actual: 2 };
        assert_eq!(err.to_string(), "Buffer length mismatch: expected 8 samples, got 2");
        assert_eq!(
            DspError::ZeroTransformSize.to_string(),
            "FFT transform size must be positive"
        );
    }
}
