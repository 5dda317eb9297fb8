//! Error type shared by the core data structures.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced by the core data structures.
///
/// Allocation failure is the only recoverable error class. Precondition
/// violations (out-of-bounds edits, non-monotonic sample times, zero
/// capacities) are programmer errors and panic instead of returning here.
#[derive(Debug, Error)]
pub enum Error {
    /// The allocator could not satisfy a growth request. The structure that
    /// reported this is untouched and remains valid.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}
