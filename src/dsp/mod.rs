//! Digital Signal Processing
//!
//! The FFT engine, its buffer manager, the dB spectrum reduction and the
//! window catalog. No I/O dependencies.

pub mod analyzer;
pub mod buffers;
pub mod fft;
pub mod spectrum;
pub mod window;

// Re-export commonly used items
pub use analyzer::SpectrumAnalyzer;
pub use buffers::TransformBuffers;
pub use fft::FftEngine;
pub use spectrum::{bin_level_db, MAGNITUDE_FLOOR};
pub use window::Window;
