//! Windowed spectrum analysis

use crate::domain::{AnalyzerConfig, Sample, Spectrum, SpectrumError, SpectrumResult};
use crate::dsp::fft::FftEngine;
use crate::dsp::window::Window;

/// Applies a window to each block and reduces it to a dB spectrum
pub struct SpectrumAnalyzer {
    engine: FftEngine,
    window: Window,
    coefficients: Vec<f64>,
    sample_rate: Option<f64>,
    block: Vec<Sample>,
}

impl SpectrumAnalyzer {
    /// Build an analyzer from a profile
    pub fn new(config: &AnalyzerConfig) -> SpectrumResult<Self> {
        config.validate()?;

        let mut engine = FftEngine::new();
        engine.init(config.fft_size)?;

        let window = config.window.validated();
        let coefficients = window.generate(config.fft_size);

        log::debug!(
            "Spectrum analyzer '{}': {} points, {} window",
            config.name,
            config.fft_size,
            window.name()
        );

        Ok(Self {
            engine,
            window,
            coefficients,
            sample_rate: config.sample_rate,
            block: Vec::with_capacity(config.fft_size),
        })
    }

    /// Window `samples` and compute their peak-normalized dB spectrum
    ///
    /// `samples` must hold exactly `fft_size()` values; an empty slice
    /// yields an empty spectrum.
    pub fn analyze(&mut self, samples: &[Sample]) -> SpectrumResult<Spectrum> {
        if samples.is_empty() {
            return Ok(Spectrum::empty());
        }
        let size = self.fft_size();
        if samples.len() != size {
            return Err(SpectrumError::LengthMismatch {
                expected: size,
                re: samples.len(),
                im: samples.len(),
            });
        }

        self.block.clear();
        if self.coefficients.is_empty() {
            self.block.extend_from_slice(samples);
        } else {
            self.block
                .extend(samples.iter().zip(&self.coefficients).map(|(s, w)| s * w));
        }

        self.engine.decibel_spectrum(&self.block)
    }

    /// Swap the window, recomputing coefficients for the current size
    pub fn set_window(&mut self, window: Window) {
        self.window = window.validated();
        self.coefficients = self.window.generate(self.fft_size());
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn fft_size(&self) -> usize {
        self.engine.size()
    }

    pub fn sample_rate(&self) -> Option<f64> {
        self.sample_rate
    }

    /// Frequency of the 0 dB bin in Hz, if a sample rate is configured
    pub fn peak_frequency_hz(&self, spectrum: &Spectrum) -> Option<f64> {
        let rate = self.sample_rate?;
        let bin = spectrum.peak_bin()?;
        spectrum.freq.get(bin).map(|f| f * rate)
    }
}
