//! Growable contiguous value buffer with arbitrary-position insert/delete.
//!
//! `EditBuffer` is the storage primitive under `Curve`: a flat array of f32
//! with an explicit capacity-doubling growth policy and a single edit
//! operation that opens or closes a gap at any position, shifting the tail.
//! Position handles are indices and slices, never raw pointers, so a
//! reallocating edit cannot leave a caller holding a dangling location.

use crate::error::Error;

/// A contiguous, capacity-doubling buffer of `f32` values.
///
/// Capacity only ever grows (doubling until sufficient) and never shrinks.
/// `capacity()` reports the logical doubling capacity, which is what the
/// growth policy and the host-binding surface observe.
#[derive(Debug)]
pub struct EditBuffer {
    data: Vec<f32>,
    capacity: usize,
}

impl EditBuffer {
    /// Allocate an empty buffer with room for `initial_capacity` elements.
    ///
    /// Allocation failure is the only error. Panics if `initial_capacity`
    /// is zero.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, Error> {
        assert!(initial_capacity > 0, "initial capacity must be > 0");

        let mut data = Vec::new();
        data.try_reserve_exact(initial_capacity)?;
        Ok(Self {
            data,
            capacity: initial_capacity,
        })
    }

    /// Number of occupied element slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of allocated element slots (`len() <= capacity()`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Grow capacity (doubling until sufficient) so that `additional` more
    /// elements fit without reallocating. On failure the buffer is untouched.
    ///
    /// Callers editing multiple buffers in lock-step (see `Curve::set`) can
    /// reserve all of them up front so no edit fails partway through.
    pub fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        let needed = self.data.len() + additional;
        if needed <= self.capacity {
            return Ok(());
        }

        let mut capacity = self.capacity;
        while capacity < needed {
            capacity *= 2;
        }
        self.data.try_reserve_exact(capacity - self.data.len())?;
        self.capacity = capacity;
        Ok(())
    }

    /// Insert (`delta > 0`) or remove (`delta < 0`) `|delta|` elements at
    /// position `at`, shifting the tail to fit.
    ///
    /// For an insertion, returns the opened gap `[at, at + delta)`; its
    /// contents are unspecified until the caller writes them. For a removal,
    /// returns the shifted tail starting at `at` (possibly empty); vacated
    /// slots past the new length retain stale values and must not be read.
    ///
    /// Removal never reallocates and cannot fail. Insertion reallocates only
    /// when the new length exceeds capacity, doubling capacity until it
    /// fits; on allocation failure the buffer is left untouched.
    ///
    /// Panics if `at > len()`, `delta == 0`, or a removal reaches past the
    /// end of the buffer.
    pub fn resize_for_edit(&mut self, at: usize, delta: isize) -> Result<&mut [f32], Error> {
        assert!(at <= self.data.len(), "edit position out of bounds");
        assert!(delta != 0, "edit delta must be non-zero");

        if delta < 0 {
            let removed = delta.unsigned_abs();
            assert!(
                removed <= self.data.len() - at,
                "removal reaches past the end of the buffer"
            );
            self.data.drain(at..at + removed);
            return Ok(&mut self.data[at..]);
        }

        let inserted = delta as usize;
        self.reserve(inserted)?;

        // Extend, then rotate the zero fill into the gap; the reserve above
        // guarantees this never reallocates.
        let old_len = self.data.len();
        self.data.resize(old_len + inserted, 0.0);
        self.data[at..].rotate_right(inserted);
        Ok(&mut self.data[at..at + inserted])
    }
}
