//! Sorted keyframe curves with step (constant) evaluation.
//!
//! A `Curve` is a strictly-ascending series of unique time keys, each
//! carrying a fixed number of value components (`cardinality`). Times and
//! values live in two `EditBuffer`s kept in lock-step: key `i`'s components
//! occupy `values[i*cardinality .. (i+1)*cardinality]`.

use crate::buffer::EditBuffer;
use crate::config::Config;
use crate::error::Error;

/// A sorted, unique-key time series of multi-component values.
#[derive(Debug)]
pub struct Curve {
    cardinality: usize,
    num_keys: usize,
    times: EditBuffer,
    values: EditBuffer,
}

impl Curve {
    /// Create an empty curve with `cardinality` components per key and room
    /// for `initial_keys` keys before the first growth.
    ///
    /// Panics if `cardinality` or `initial_keys` is zero.
    pub fn with_capacity(cardinality: usize, initial_keys: usize) -> Result<Self, Error> {
        assert!(cardinality > 0, "cardinality must be > 0");
        assert!(initial_keys > 0, "initial key capacity must be > 0");

        Ok(Self {
            cardinality,
            num_keys: 0,
            times: EditBuffer::with_capacity(initial_keys)?,
            values: EditBuffer::with_capacity(initial_keys * cardinality)?,
        })
    }

    /// Create an empty curve sized from a [`Config`].
    pub fn from_config(cardinality: usize, config: &Config) -> Result<Self, Error> {
        Self::with_capacity(cardinality, config.initial_key_capacity)
    }

    /// Components per key, fixed for the curve's lifetime.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    #[inline]
    pub fn num_keys(&self) -> usize {
        self.num_keys
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// The time keys, strictly ascending.
    #[inline]
    pub fn times(&self) -> &[f32] {
        self.times.as_slice()
    }

    /// Allocated key slots in the times buffer.
    #[inline]
    pub fn times_capacity(&self) -> usize {
        self.times.capacity()
    }

    /// Allocated component slots in the values buffer
    /// (`times_capacity() * cardinality` until the first growth).
    #[inline]
    pub fn values_capacity(&self) -> usize {
        self.values.capacity()
    }

    /// All value components, `cardinality` per key, in key order.
    #[inline]
    pub fn values(&self) -> &[f32] {
        self.values.as_slice()
    }

    /// Time of key `i`. Panics if `i >= num_keys()`.
    #[inline]
    pub fn key_time(&self, i: usize) -> f32 {
        self.times.as_slice()[i]
    }

    /// Value components of key `i`. Panics if `i >= num_keys()`.
    #[inline]
    pub fn key_value(&self, i: usize) -> &[f32] {
        &self.values.as_slice()[i * self.cardinality..(i + 1) * self.cardinality]
    }

    /// Index of the rightmost key with `time <= at_time`, or `None` if every
    /// key is later (including the empty curve). O(log n).
    pub fn find_nearest_lte(&self, at_time: f32) -> Option<usize> {
        let n = self.times.as_slice().partition_point(|&t| t <= at_time);
        n.checked_sub(1)
    }

    /// Start index and count of the keys inside `[from_time, to_time]`, or
    /// `None` when no key lies in the range (the range sits entirely in a
    /// gap, before the first key, or after the last). O(log n).
    ///
    /// Panics if `to_time < from_time`.
    pub fn find_inclusive_range(&self, from_time: f32, to_time: f32) -> Option<(usize, usize)> {
        assert!(to_time >= from_time, "range end must be >= range start");

        let times = self.times.as_slice();
        let start = times.partition_point(|&t| t < from_time);
        let end = times.partition_point(|&t| t <= to_time);
        if start == end {
            return None;
        }
        Some((start, end - start))
    }

    /// Set the value at `time`: overwrite in place on an exact time match,
    /// otherwise insert a new key at its sorted position. Ordering is
    /// preserved by construction; no re-sort ever happens.
    ///
    /// `value` must have exactly `cardinality` components (panics
    /// otherwise). Allocation failure leaves the curve unchanged.
    pub fn set(&mut self, time: f32, value: &[f32]) -> Result<(), Error> {
        assert!(
            value.len() == self.cardinality,
            "value must have exactly `cardinality` components"
        );

        let found = self.find_nearest_lte(time);
        if let Some(i) = found {
            if self.times.as_slice()[i] == time {
                let at = i * self.cardinality;
                self.values.as_mut_slice()[at..at + self.cardinality].copy_from_slice(value);
                return Ok(());
            }
        }

        // New key goes immediately after the nearest-lte key (or at 0).
        // Reserve both buffers before editing either, so an allocation
        // failure cannot leave times and values out of lock-step.
        let key_i = found.map_or(0, |i| i + 1);
        self.times.reserve(1)?;
        self.values.reserve(self.cardinality)?;

        let slot = self.times.resize_for_edit(key_i, 1)?;
        slot[0] = time;
        let slot = self
            .values
            .resize_for_edit(key_i * self.cardinality, self.cardinality as isize)?;
        slot.copy_from_slice(value);
        self.num_keys += 1;
        Ok(())
    }

    /// Remove the key at exactly `time`; silently does nothing if no key
    /// matches (nearest keys are never removed).
    pub fn remove_at(&mut self, time: f32) {
        let Some(i) = self.find_nearest_lte(time) else {
            return;
        };
        if self.times.as_slice()[i] != time {
            return;
        }

        // Removal edits never reallocate, so neither call can fail.
        let _ = self.times.resize_for_edit(i, -1);
        let _ = self
            .values
            .resize_for_edit(i * self.cardinality, -(self.cardinality as isize));
        self.num_keys -= 1;
    }

    /// Evaluate the curve at `time` with step interpolation: the value of
    /// the rightmost key at or before `time`, or the first key's value when
    /// `time` precedes every key (flat extrapolation). Returns `None` only
    /// on an empty curve.
    pub fn evaluate(&self, time: f32) -> Option<&[f32]> {
        let i = match self.find_nearest_lte(time) {
            Some(i) => i,
            None if self.num_keys > 0 => 0,
            None => return None,
        };
        Some(self.key_value(i))
    }
}
