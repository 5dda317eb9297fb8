//! Keytape core (engine-agnostic)
//!
//! Sparse, time-indexed keyframe storage and streaming sample compression
//! for step-interpolated playback. Three primitives:
//!
//! - [`EditBuffer`]: a contiguous, capacity-doubling buffer of floats with
//!   arbitrary-position insert/delete.
//! - [`Curve`]: a sorted, unique-key time series of multi-component values
//!   built on two `EditBuffer`s, with point lookup, nearest-key search,
//!   inclusive range search, and step evaluation.
//! - [`Recorder`]: a chunked arena fed by an online compressor that
//!   eliminates runs of identical values while preserving exact step
//!   playback at every originally observed timestamp.
//!
//! Host-binding layers (wasm, engine adapters) live outside this crate and
//! consume the plain read surface (`len`/`capacity`, chunk and key
//! accessors) plus the fallible constructors.

pub mod buffer;
pub mod config;
pub mod curve;
pub mod error;
pub mod recorder;
pub mod stored;

// Re-exports for consumers (adapters)
pub use buffer::EditBuffer;
pub use config::Config;
pub use curve::Curve;
pub use error::Error;
pub use recorder::{Chunk, Recorder, Sample};
pub use stored::{curve_to_stored_json, parse_stored_curve_json, StoredCurve, StoredError, StoredKey};
