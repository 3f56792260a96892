//! Domain error types

use thiserror::Error;

/// Errors reported by the FFT engine and its collaborators
///
/// `NotInitialized` and `LengthMismatch` are the non-fatal "empty result"
/// outcomes: they carry no data and leave the engine untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("FFT engine is not initialized; call init(size) first")]
    NotInitialized,

    #[error("Input length mismatch: expected {expected}, got re={re} im={im}")]
    LengthMismatch { expected: usize, re: usize, im: usize },

    #[error("Invalid transform size {0}: must be a non-zero power of two")]
    InvalidSize(usize),

    #[error("Failed to allocate {requested} transform slots")]
    Allocation { requested: usize },

    #[error("Spectrum bin {bin} is not finite; input overflowed or held NaN/inf")]
    NonFinite { bin: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for spectral operations
pub type SpectrumResult<T> = Result<T, SpectrumError>;
