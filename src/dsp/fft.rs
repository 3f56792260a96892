//! FFT engine
//!
//! Owns the transform buffers, interleaves caller channels into them and
//! drives a `TransformPrimitive`. The engine is either uninitialized
//! (`size() == 0`) or ready for exactly one transform length.

use crate::adapters::RustFftKernel;
use crate::domain::{ComplexSignal, Direction, Sample, SpectrumError, SpectrumResult};
use crate::dsp::buffers::TransformBuffers;
use crate::ports::TransformPrimitive;

/// Complex FFT engine for one power-of-two transform length
pub struct FftEngine<P: TransformPrimitive = RustFftKernel> {
    primitive: P,
    buffers: TransformBuffers,
}

impl FftEngine<RustFftKernel> {
    /// Create an uninitialized engine backed by RustFFT
    ///
    /// `init` still allocates the bit-reversal and twiddle tables, but
    /// `RustFftKernel` plans its own and never reads them. Use
    /// `with_primitive(Radix2Kernel::new())` for the table-driven kernel.
    pub fn new() -> Self {
        Self::with_primitive(RustFftKernel::new())
    }
}

impl Default for FftEngine<RustFftKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TransformPrimitive> FftEngine<P> {
    /// Create an uninitialized engine around a specific primitive
    pub fn with_primitive(primitive: P) -> Self {
        Self {
            primitive,
            buffers: TransformBuffers::new(),
        }
    }

    /// Size the engine for `size`-point transforms
    ///
    /// Always reallocates, even when `size` is unchanged. On error the engine
    /// keeps whatever state it had before the call.
    pub fn init(&mut self, size: usize) -> SpectrumResult<()> {
        if size == 0 || !size.is_power_of_two() {
            return Err(SpectrumError::InvalidSize(size));
        }

        self.buffers.allocate(size)?;
        self.primitive.prepare(self.buffers.tables_mut());

        log::debug!("FFT engine ready: {} points ({})", size, self.primitive.name());
        Ok(())
    }

    /// Configured transform length, 0 before `init`
    pub fn size(&self) -> usize {
        self.buffers.size()
    }

    pub fn is_ready(&self) -> bool {
        self.buffers.is_allocated()
    }

    /// Read-only view of the interleaved scratch buffer
    pub fn scratch(&self) -> &[Sample] {
        self.buffers.data()
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Unnormalized forward DFT of `re + i·im`
    pub fn forward_transform(
        &mut self,
        re: &[Sample],
        im: &[Sample],
    ) -> SpectrumResult<ComplexSignal> {
        self.run(re, im, Direction::Forward)
    }

    /// Inverse DFT of `re + i·im`, scaled by `1/N`
    pub fn inverse_transform(
        &mut self,
        re: &[Sample],
        im: &[Sample],
    ) -> SpectrumResult<ComplexSignal> {
        let mut out = self.run(re, im, Direction::Inverse)?;

        // The primitive leaves the inverse scaled by N
        let scale = 1.0 / self.size() as Sample;
        out.re.iter_mut().for_each(|x| *x *= scale);
        out.im.iter_mut().for_each(|x| *x *= scale);
        Ok(out)
    }

    fn check_input(
        &self,
        re: &[Sample],
        im: &[Sample],
        direction: Direction,
    ) -> SpectrumResult<()> {
        let size = self.size();
        if size == 0 {
            log::error!(
                "{} transform requested before init(size)",
                match direction {
                    Direction::Forward => "forward",
                    Direction::Inverse => "inverse",
                }
            );
            return Err(SpectrumError::NotInitialized);
        }
        if re.len() != size || im.len() != size {
            log::warn!(
                "Transform input length mismatch: expected {size}, got re={} im={}",
                re.len(),
                im.len()
            );
            return Err(SpectrumError::LengthMismatch {
                expected: size,
                re: re.len(),
                im: im.len(),
            });
        }
        Ok(())
    }

    fn run(
        &mut self,
        re: &[Sample],
        im: &[Sample],
        direction: Direction,
    ) -> SpectrumResult<ComplexSignal> {
        self.check_input(re, im, direction)?;

        let (data, tables) = self.buffers.parts_mut();
        for ((pair, &r), &i) in data.chunks_exact_mut(2).zip(re).zip(im) {
            pair[0] = r;
            pair[1] = i;
        }

        self.primitive.transform(data, direction, tables);

        let (re_out, im_out): (Vec<Sample>, Vec<Sample>) =
            data.chunks_exact(2).map(|pair| (pair[0], pair[1])).unzip();
        Ok(ComplexSignal::new(re_out, im_out))
    }
}
