//! Spectral analysis engine
//!
//! A reusable complex FFT engine with explicit buffer lifecycle and a
//! peak-normalized decibel spectrum built on top of it.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, errors and configuration profiles
//! - `ports/` - The `TransformPrimitive` trait the engine drives
//! - `adapters/` - Primitive implementations (RustFFT, table-driven radix-2)
//!   and the on-disk profile store
//! - `dsp/` - Buffer manager, FFT engine, dB spectrum, window catalog
//!
//! ```
//! use spectral_engine::dsp::FftEngine;
//!
//! let mut engine = FftEngine::new();
//! engine.init(4).unwrap();
//! let spectrum = engine.decibel_spectrum(&[1.0, 1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(spectrum.freq, vec![0.0, 0.25, 0.5]);
//! assert_eq!(spectrum.spec[0], 0.0);
//! ```

// Core domain (pure, no I/O)
pub mod domain;
pub mod dsp;
pub mod ports;

// Numeric kernels and file I/O
pub mod adapters;

pub use adapters::ProfileStore;
pub use domain::{AnalyzerConfig, ComplexSignal, Direction, Spectrum, SpectrumError, SpectrumResult};
pub use dsp::{FftEngine, SpectrumAnalyzer, Window};
