//! Core domain types

use serde::{Deserialize, Serialize};

/// Sample type used throughout the engine
pub type Sample = f64;

/// Transform direction handed to the transform primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `X[k] = Σ x[n]·e^{-2πi·nk/N}`
    Forward,
    /// Same sum with a positive exponent, left unnormalized
    Inverse,
}

impl Direction {
    /// Signed form of the direction: `+1` forward, `-1` inverse
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Inverse => -1,
        }
    }
}

/// A complex sequence split into real and imaginary channels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexSignal {
    pub re: Vec<Sample>,
    pub im: Vec<Sample>,
}

impl ComplexSignal {
    pub fn new(re: Vec<Sample>, im: Vec<Sample>) -> Self {
        Self { re, im }
    }

    /// Number of complex samples
    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }
}

/// Peak-normalized decibel spectrum
///
/// `freq` holds normalized bin frequencies in `[0, 0.5]` (cycles per sample)
/// and `spec` the matching levels in dB relative to the strongest bin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub freq: Vec<f64>,
    pub spec: Vec<f64>,
}

impl Spectrum {
    /// The valid result of analysing an empty input
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.freq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.freq.is_empty()
    }

    /// Bin frequencies converted to Hz for a known sample rate
    pub fn frequencies_hz(&self, sample_rate: f64) -> Vec<f64> {
        self.freq.iter().map(|f| f * sample_rate).collect()
    }

    /// Index of the 0 dB bin (the first one, if several tie)
    pub fn peak_bin(&self) -> Option<usize> {
        self.spec
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &db)| match best {
                Some((_, top)) if top >= db => best,
                _ => Some((i, db)),
            })
            .map(|(i, _)| i)
    }
}
