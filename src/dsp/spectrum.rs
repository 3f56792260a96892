//! Decibel spectrum reduction
//!
//! Reduces a forward transform of a real signal to the non-redundant half of
//! its power spectrum, in dB relative to the strongest bin.

use crate::domain::{Sample, Spectrum, SpectrumError, SpectrumResult};
use crate::dsp::fft::FftEngine;
use crate::ports::TransformPrimitive;

/// Smallest magnitude fed to `log10`, keeps silent bins finite
///
/// Equivalent to a power floor of `f64::MIN_POSITIVE` (about -3077 dB).
pub const MAGNITUDE_FLOOR: f64 = 1.491_668_146_240_041_3e-154;

/// Level of one bin in dB, `10·log10(re² + im²)`
///
/// Computed as `20·log10(|X|)` through `hypot`, so bins whose squared
/// magnitude would overflow still produce a finite level.
pub fn bin_level_db(re: f64, im: f64) -> f64 {
    20.0 * re.hypot(im).max(MAGNITUDE_FLOOR).log10()
}

/// Shift every level so the largest one sits at exactly 0 dB
///
/// Fails when any level is not finite, which only happens when the
/// transform itself overflowed or the input held NaN/inf.
fn normalize_to_peak(levels: &mut [f64]) -> SpectrumResult<()> {
    if let Some(bin) = levels.iter().position(|db| !db.is_finite()) {
        log::warn!("Spectrum bin {bin} is not finite, cannot normalize");
        return Err(SpectrumError::NonFinite { bin });
    }
    let peak = levels.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    levels.iter_mut().for_each(|db| *db -= peak);
    Ok(())
}

impl<P: TransformPrimitive> FftEngine<P> {
    /// Peak-normalized dB spectrum of a real signal
    ///
    /// Returns `N/2 + 1` bins with `freq[i] = i / N`. An empty input yields an
    /// empty spectrum; any other length must equal `size()`.
    pub fn decibel_spectrum(&mut self, samples: &[Sample]) -> SpectrumResult<Spectrum> {
        if samples.is_empty() {
            return Ok(Spectrum::empty());
        }

        let zeros = vec![0.0; samples.len()];
        let bins = self.forward_transform(samples, &zeros)?;

        let size = self.size();
        let num_bins = size / 2 + 1;

        let freq: Vec<f64> = (0..num_bins).map(|i| i as f64 / size as f64).collect();
        let mut spec: Vec<f64> = bins
            .re
            .iter()
            .zip(bins.im.iter())
            .take(num_bins)
            .map(|(&re, &im)| bin_level_db(re, im))
            .collect();

        normalize_to_peak(&mut spec)?;
        Ok(Spectrum { freq, spec })
    }
}
