//! Analyzer configuration profiles
//!
//! A profile captures everything needed to rebuild a `SpectrumAnalyzer`:
//! transform size, window choice and (optionally) the sample rate used to
//! label bins in Hz.

use serde::{Deserialize, Serialize};

use crate::domain::{SpectrumError, SpectrumResult};
use crate::dsp::window::Window;

/// A saved analyzer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Profile name (e.g., "Default", "Speech 48k")
    pub name: String,
    /// Transform length, a power of two
    pub fft_size: usize,
    /// Envelope applied before the transform
    #[serde(default)]
    pub window: Window,
    /// Sample rate in Hz, when bins should be reported in Hz
    #[serde(default)]
    pub sample_rate: Option<f64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            fft_size: 1024,
            window: Window::default(),
            sample_rate: None,
        }
    }
}

impl AnalyzerConfig {
    /// Check the profile can drive an engine
    pub fn validate(&self) -> SpectrumResult<()> {
        if self.fft_size == 0 || !self.fft_size.is_power_of_two() {
            return Err(SpectrumError::InvalidSize(self.fft_size));
        }
        if let Some(rate) = self.sample_rate {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(SpectrumError::Config(format!("Invalid sample rate: {rate}")));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> SpectrumResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SpectrumError::Config(format!("Serialization error: {e}")))
    }

    pub fn from_json(json: &str) -> SpectrumResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SpectrumError::Config(format!("Failed to parse config: {e}")))
    }
}
