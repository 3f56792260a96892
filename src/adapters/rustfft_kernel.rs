//! Transform primitive backed by RustFFT

use std::sync::Arc;

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

use crate::domain::{Direction, Sample};
use crate::ports::{AuxTables, TransformPrimitive};

/// Default primitive: plans forward and inverse FFTs once per size
///
/// RustFFT works on `Complex<f64>` slices, so the interleaved buffer is
/// staged through a reused complex scratch vector. The aux tables are left
/// untouched; the plans carry their own twiddles.
#[derive(Default)]
pub struct RustFftKernel {
    forward: Option<Arc<dyn Fft<f64>>>,
    inverse: Option<Arc<dyn Fft<f64>>>,
    staging: Vec<Complex64>,
    fft_scratch: Vec<Complex64>,
}

impl RustFftKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the current plans were built for, zero before `prepare`
    pub fn planned_size(&self) -> usize {
        self.forward.as_ref().map_or(0, |fft| fft.len())
    }
}

impl TransformPrimitive for RustFftKernel {
    fn name(&self) -> &'static str {
        "rustfft"
    }

    fn prepare(&mut self, tables: &mut AuxTables) {
        let size = tables.size();
        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(size);
        let inverse = planner.plan_fft_inverse(size);

        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());

        self.staging = vec![Complex64::new(0.0, 0.0); size];
        self.fft_scratch = vec![Complex64::new(0.0, 0.0); scratch_len];
        self.forward = Some(forward);
        self.inverse = Some(inverse);
    }

    fn transform(&mut self, buffer: &mut [Sample], direction: Direction, _tables: &AuxTables) {
        let plan = match direction {
            Direction::Forward => self.forward.as_ref(),
            Direction::Inverse => self.inverse.as_ref(),
        };
        let Some(plan) = plan else {
            log::error!("rustfft kernel used before prepare()");
            return;
        };
        debug_assert_eq!(buffer.len(), 2 * plan.len());

        for (slot, pair) in self.staging.iter_mut().zip(buffer.chunks_exact(2)) {
            *slot = Complex64::new(pair[0], pair[1]);
        }

        plan.process_with_scratch(&mut self.staging, &mut self.fft_scratch);

        for (pair, value) in buffer.chunks_exact_mut(2).zip(self.staging.iter()) {
            pair[0] = value.re;
            pair[1] = value.im;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables_for(size: usize) -> AuxTables {
        AuxTables {
            bit_reversal: vec![0; size],
            twiddles: vec![0.0; size],
        }
    }

    #[test]
    fn prepare_plans_for_table_size() {
        let mut kernel = RustFftKernel::new();
        assert_eq!(kernel.planned_size(), 0);

        let mut tables = tables_for(16);
        kernel.prepare(&mut tables);
        assert_eq!(kernel.planned_size(), 16);
        // Plans carry their own twiddles
        assert!(tables.twiddles.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn forward_then_inverse_scales_by_size() {
        let mut kernel = RustFftKernel::new();
        let mut tables = tables_for(4);
        kernel.prepare(&mut tables);

        let original = [1.0, 0.5, -2.0, 0.0, 3.0, -1.0, 0.25, 4.0];
        let mut buffer = original;
        kernel.transform(&mut buffer, Direction::Forward, &tables);
        kernel.transform(&mut buffer, Direction::Inverse, &tables);

        for (got, want) in buffer.iter().zip(original.iter()) {
            assert!((got - 4.0 * want).abs() < 1e-12, "got {got}, want {}", 4.0 * want);
        }
    }

    #[test]
    fn transform_before_prepare_leaves_buffer_alone() {
        let mut kernel = RustFftKernel::new();
        let tables = tables_for(2);
        let mut buffer = [1.0, 2.0, 3.0, 4.0];
        kernel.transform(&mut buffer, Direction::Forward, &tables);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0]);
    }
}
