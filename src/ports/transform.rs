//! Transform primitive port
//!
//! The engine never computes butterflies itself. It hands an interleaved
//! buffer to a `TransformPrimitive` together with the auxiliary tables the
//! primitive asked to have sized for the current transform length.

use crate::domain::{Direction, Sample};

/// Tables a primitive may precompute for one transform size
///
/// Both tables are length `N` and start zeroed; only the primitive gives
/// them meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuxTables {
    /// Bit-reversal permutation, one entry per complex sample
    pub bit_reversal: Vec<usize>,
    /// Trig table, `N/2` interleaved `(cos, sin)` pairs
    pub twiddles: Vec<Sample>,
}

impl AuxTables {
    /// Transform size (complex samples) these tables describe
    pub fn size(&self) -> usize {
        self.bit_reversal.len()
    }
}

/// In-place complex DFT over an interleaved `[re0, im0, re1, im1, ...]` buffer
///
/// Implementations must leave the result interleaved in the same buffer and
/// must not normalize in either direction.
pub trait TransformPrimitive {
    /// Short identifier used in log lines
    fn name(&self) -> &'static str;

    /// Precompute whatever the primitive needs for `tables.size()` points
    fn prepare(&mut self, tables: &mut AuxTables);

    /// Transform `buffer` (length `2 * tables.size()`) in place
    fn transform(&mut self, buffer: &mut [Sample], direction: Direction, tables: &AuxTables);
}
