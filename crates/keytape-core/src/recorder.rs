//! Streaming sample recording with run-elimination compression.
//!
//! `Recorder` consumes a strictly-increasing stream of `(time, value)`
//! samples and stores the minimal set needed to reproduce the stream under
//! step (hold-last-value) playback: runs of identical values cost O(1)
//! regardless of length, with a synthesized boundary sample marking the
//! exact end of each hold.
//!
//! Storage is a chunk arena: fixed-capacity blocks whose sample storage is
//! reserved once and never relocated, written only at the tail. Past chunks
//! are never touched again, so growth has no copy cost.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::curve::Curve;
use crate::error::Error;

/// A single recorded `(time, value)` sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f32,
    pub value: f32,
}

/// A fixed-capacity block of samples in the recorder's arena.
#[derive(Debug)]
pub struct Chunk {
    capacity: usize,
    samples: Vec<Sample>,
}

impl Chunk {
    fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut samples = Vec::new();
        samples.try_reserve_exact(capacity)?;
        Ok(Self { capacity, samples })
    }

    /// Number of samples buffered in this chunk.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Fixed sample capacity of this chunk.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }
}

/// An online compressor over a chunked, append-only sample arena.
///
/// Input times must be non-negative and strictly increasing across calls;
/// violating that contract is a programmer error and panics. The time
/// sentinels start at -1.0, below every valid time.
#[derive(Debug)]
pub struct Recorder {
    chunk_size: usize,
    chunks: Vec<Chunk>,
    write_head: usize,

    last_value_recorded: f32,
    last_time_recorded: f32,
    last_time_seen: f32,
}

impl Recorder {
    /// Create a recorder with `num_initial_chunks` preallocated chunks of
    /// `chunk_size` samples each. Panics if either is zero.
    pub fn new(chunk_size: usize, num_initial_chunks: usize) -> Result<Self, Error> {
        assert!(chunk_size > 0, "chunk size must be > 0");
        assert!(num_initial_chunks > 0, "initial chunk count must be > 0");

        let mut chunks = Vec::new();
        chunks.try_reserve(num_initial_chunks)?;
        for _ in 0..num_initial_chunks {
            chunks.push(Chunk::with_capacity(chunk_size)?);
        }

        Ok(Self {
            chunk_size,
            chunks,
            write_head: 0,
            last_value_recorded: 0.0,
            last_time_recorded: -1.0,
            last_time_seen: -1.0,
        })
    }

    /// Create a recorder sized from a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(config.chunk_size, config.initial_chunks)
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// All chunks in order. Every chunk before `write_head()` is full; the
    /// write-head chunk is partially filled; later chunks are empty spares.
    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Index of the chunk currently accepting writes.
    #[inline]
    pub fn write_head(&self) -> usize {
        self.write_head
    }

    /// Value of the most recently recorded sample.
    #[inline]
    pub fn last_value_recorded(&self) -> f32 {
        self.last_value_recorded
    }

    /// Time of the most recently recorded sample, or -1.0 before any.
    #[inline]
    pub fn last_time_recorded(&self) -> f32 {
        self.last_time_recorded
    }

    /// Time of the most recently handled sample (recorded or held), or -1.0
    /// before any.
    #[inline]
    pub fn last_time_seen(&self) -> f32 {
        self.last_time_seen
    }

    /// Total number of samples recorded across all chunks.
    pub fn num_samples(&self) -> usize {
        self.chunks.iter().map(Chunk::len).sum()
    }

    /// All recorded samples in time order.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.chunks.iter().flat_map(|chunk| chunk.samples.iter())
    }

    /// Feed one raw sample into the compressor.
    ///
    /// `time` must be non-negative and strictly greater than the time of
    /// every previously handled sample (panics otherwise). The only
    /// recoverable failure is chunk allocation when the arena grows.
    pub fn handle_sample(&mut self, time: f32, value: f32) -> Result<(), Error> {
        assert!(time >= 0.0, "sample times must be non-negative");
        assert!(
            self.last_time_seen < 0.0 || time > self.last_time_seen,
            "sample times must be strictly increasing"
        );

        // A sample repeating the last recorded value extends a hold: note
        // its time and leave the buffered data untouched.
        if self.last_time_seen >= 0.0 && self.last_value_recorded == value {
            self.last_time_seen = time;
            return Ok(());
        }

        // The value changed (or this is the first sample). If samples were
        // skipped during a hold, first record a boundary sample at the
        // hold's end time so step playback keeps the held value for the
        // full span, then record the incoming sample.
        if self.last_time_seen > self.last_time_recorded {
            self.write(self.last_time_seen, self.last_value_recorded)?;
        }
        self.write(time, value)?;
        self.last_time_seen = time;
        Ok(())
    }

    /// Materialize the boundary sample of a pending hold, if any, so that
    /// playback covers the final run through its last observed time.
    ///
    /// Idempotent; further `handle_sample` calls remain valid afterwards.
    pub fn flush(&mut self) -> Result<(), Error> {
        if self.last_time_seen > self.last_time_recorded {
            self.write(self.last_time_seen, self.last_value_recorded)?;
        }
        Ok(())
    }

    /// Bake the recording into a cardinality-1 curve for step-interpolated
    /// playback. Call `flush` first if the tail of the final hold matters.
    pub fn to_curve(&self, initial_keys: usize) -> Result<Curve, Error> {
        let mut curve = Curve::with_capacity(1, initial_keys.max(1))?;
        for sample in self.samples() {
            curve.set(sample.time, &[sample.value])?;
        }
        Ok(curve)
    }

    fn write(&mut self, time: f32, value: f32) -> Result<(), Error> {
        let head = self.write_head;
        debug_assert!(!self.chunks[head].is_full());

        self.chunks[head].samples.push(Sample { time, value });
        self.last_time_recorded = time;
        self.last_value_recorded = value;

        // Advance past a freshly filled chunk, growing the arena if it was
        // the last one. Past chunks are never written again.
        if self.chunks[head].is_full() {
            if head + 1 == self.chunks.len() {
                let chunk = Chunk::with_capacity(self.chunk_size)?;
                self.chunks.try_reserve(1)?;
                self.chunks.push(chunk);
            }
            self.write_head = head + 1;
        }
        Ok(())
    }
}
