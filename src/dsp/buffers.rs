//! Transform buffer manager
//!
//! Owns the interleaved complex buffer and the auxiliary tables for one
//! transform size. A new set is fully built before the old one is dropped, so
//! a failed allocation never leaves a half-sized set behind.

use crate::domain::{Sample, SpectrumError, SpectrumResult};
use crate::ports::AuxTables;

/// Scratch storage sized for a single transform length
#[derive(Debug, Default)]
pub struct TransformBuffers {
    size: usize,
    data: Vec<Sample>,
    tables: AuxTables,
}

/// Zero-filled vector, reporting allocation failure instead of aborting
fn zeroed<T: Clone + Default>(len: usize) -> SpectrumResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| SpectrumError::Allocation { requested: len })?;
    v.resize(len, T::default());
    Ok(v)
}

impl TransformBuffers {
    /// An empty manager with nothing allocated
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any live set with zeroed buffers for `size` complex samples
    ///
    /// The complex buffer holds `2 * size` reals; both tables hold `size`
    /// entries. On error the previous set is still live.
    pub fn allocate(&mut self, size: usize) -> SpectrumResult<()> {
        let slots = size
            .checked_mul(2)
            .ok_or(SpectrumError::Allocation { requested: size })?;

        let data = zeroed::<Sample>(slots)?;
        let bit_reversal = zeroed::<usize>(size)?;
        let twiddles = zeroed::<Sample>(size)?;

        if self.is_allocated() {
            log::debug!("Replacing transform buffers: {} -> {} points", self.size, size);
        }

        *self = Self {
            size,
            data,
            tables: AuxTables {
                bit_reversal,
                twiddles,
            },
        };
        Ok(())
    }

    /// Free every owned buffer; a no-op when nothing is allocated
    pub fn release(&mut self) {
        if !self.is_allocated() {
            return;
        }
        log::debug!("Releasing transform buffers for {} points", self.size);
        self.size = 0;
        self.data = Vec::new();
        self.tables = AuxTables::default();
    }

    /// Complex samples the live set is sized for (0 when released)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_allocated(&self) -> bool {
        self.size > 0
    }

    /// Interleaved complex buffer
    pub fn data(&self) -> &[Sample] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [Sample] {
        &mut self.data
    }

    pub fn tables(&self) -> &AuxTables {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut AuxTables {
        &mut self.tables
    }

    /// Split borrow for a single transform call
    pub fn parts_mut(&mut self) -> (&mut [Sample], &AuxTables) {
        (&mut self.data, &self.tables)
    }
}

impl Drop for TransformBuffers {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_owns_nothing() {
        let buffers = TransformBuffers::new();
        assert!(!buffers.is_allocated());
        assert_eq!(buffers.size(), 0);
        assert!(buffers.data().is_empty());
        assert_eq!(buffers.tables().size(), 0);
    }

    #[test]
    fn allocate_sizes_every_buffer_and_zeroes_it() {
        let mut buffers = TransformBuffers::new();
        buffers.allocate(16).unwrap();

        assert_eq!(buffers.size(), 16);
        assert_eq!(buffers.data().len(), 32);
        assert_eq!(buffers.tables().bit_reversal.len(), 16);
        assert_eq!(buffers.tables().twiddles.len(), 16);
        assert!(buffers.data().iter().all(|&x| x == 0.0));
        assert!(buffers.tables().bit_reversal.iter().all(|&i| i == 0));
    }

    #[test]
    fn reallocate_discards_previous_contents() {
        let mut buffers = TransformBuffers::new();
        buffers.allocate(8).unwrap();
        buffers.data_mut().fill(1.5);
        buffers.tables_mut().twiddles.fill(2.0);

        buffers.allocate(4).unwrap();
        assert_eq!(buffers.data().len(), 8);
        assert!(buffers.data().iter().all(|&x| x == 0.0));
        assert!(buffers.tables().twiddles.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn release_is_idempotent() {
        let mut buffers = TransformBuffers::new();
        buffers.release();

        buffers.allocate(4).unwrap();
        buffers.release();
        buffers.release();

        assert!(!buffers.is_allocated());
        assert!(buffers.data().is_empty());
    }

    #[test]
    fn oversized_request_fails_and_keeps_live_set() {
        let mut buffers = TransformBuffers::new();
        buffers.allocate(4).unwrap();
        buffers.data_mut()[0] = 7.0;

        let err = buffers.allocate(usize::MAX).unwrap_err();
        assert!(matches!(err, SpectrumError::Allocation { .. }));
        assert_eq!(buffers.size(), 4);
        assert_eq!(buffers.data()[0], 7.0);
    }
}
