//! Sizing configuration for keytape-core.

use serde::{Deserialize, Serialize};

/// Sizing hints for curves and recorders.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Key capacity allocated when a curve is created.
    pub initial_key_capacity: usize,
    /// Samples per recorder chunk.
    pub chunk_size: usize,
    /// Chunks preallocated when a recorder is created.
    pub initial_chunks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_key_capacity: 64,
            chunk_size: 256,
            initial_chunks: 1,
        }
    }
}
