//! Table-driven radix-2 transform primitive
//!
//! Iterative decimation-in-time FFT working directly on the interleaved
//! buffer. Everything it needs is precomputed into the engine-owned
//! `AuxTables`, so the kernel itself holds no state.

use std::f64::consts::PI;

use crate::domain::{Direction, Sample};
use crate::ports::{AuxTables, TransformPrimitive};

#[derive(Debug, Clone, Copy, Default)]
pub struct Radix2Kernel;

impl Radix2Kernel {
    pub fn new() -> Self {
        Self
    }
}

/// Fill `table` with the bit-reversal permutation of `0..table.len()`
fn fill_bit_reversal(table: &mut [usize]) {
    let n = table.len();
    if n == 0 {
        return;
    }
    table[0] = 0;
    let mut j = 0;
    for entry in table.iter_mut().skip(1) {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        *entry = j;
    }
}

/// Fill `table` with `e^{-2πi·j/n}` as interleaved `(cos, sin)` for `j < n/2`
fn fill_twiddles(table: &mut [Sample], n: usize) {
    for (j, pair) in table.chunks_exact_mut(2).take(n / 2).enumerate() {
        let angle = -2.0 * PI * j as f64 / n as f64;
        pair[0] = angle.cos();
        pair[1] = angle.sin();
    }
}

impl TransformPrimitive for Radix2Kernel {
    fn name(&self) -> &'static str {
        "radix2"
    }

    fn prepare(&mut self, tables: &mut AuxTables) {
        let n = tables.size();
        fill_bit_reversal(&mut tables.bit_reversal);
        fill_twiddles(&mut tables.twiddles, n);
    }

    fn transform(&mut self, buffer: &mut [Sample], direction: Direction, tables: &AuxTables) {
        let n = tables.size();
        debug_assert_eq!(buffer.len(), 2 * n);
        debug_assert!(n.is_power_of_two());

        for (i, &j) in tables.bit_reversal.iter().enumerate() {
            if i < j {
                buffer.swap(2 * i, 2 * j);
                buffer.swap(2 * i + 1, 2 * j + 1);
            }
        }

        // Inverse uses conjugated twiddles
        let conj = match direction {
            Direction::Forward => 1.0,
            Direction::Inverse => -1.0,
        };

        let mut half = 1;
        while half < n {
            let stride = n / (2 * half);
            for start in (0..n).step_by(2 * half) {
                for k in 0..half {
                    let t = k * stride;
                    let wr = tables.twiddles[2 * t];
                    let wi = conj * tables.twiddles[2 * t + 1];

                    let a = start + k;
                    let b = a + half;
                    let (br, bi) = (buffer[2 * b], buffer[2 * b + 1]);
                    let tr = br * wr - bi * wi;
                    let ti = br * wi + bi * wr;
                    let (ar, ai) = (buffer[2 * a], buffer[2 * a + 1]);

                    buffer[2 * a] = ar + tr;
                    buffer[2 * a + 1] = ai + ti;
                    buffer[2 * b] = ar - tr;
                    buffer[2 * b + 1] = ai - ti;
                }
            }
            half *= 2;
        }
    }
}
