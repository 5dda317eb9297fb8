//! Stored-curve JSON interchange.
//!
//! Public API: parse a stored-curve JSON document into a `Curve`, and
//! serialize a `Curve` back out. This is in-memory interchange with a host
//! or authoring tool, not a persistence format.
//!
//! Notes:
//! - Keys may arrive unsorted; `Curve::set` places each at its sorted
//!   position. A repeated time overwrites the earlier key, matching `set`.
//! - Every key's `value` array must have exactly `cardinality` components.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curve::Curve;

/// Errors produced while reading or writing stored-curve JSON.
#[derive(Debug, Error)]
pub enum StoredError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid stored curve: {0}")]
    Invalid(String),
    #[error("serialize error: {0}")]
    Serialize(String),
    #[error(transparent)]
    Alloc(#[from] crate::error::Error),
}

/// One stored key: a time and its value components.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoredKey {
    pub time: f32,
    pub value: Vec<f32>,
}

/// Canonical stored-curve document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoredCurve {
    pub name: String,
    pub cardinality: usize,
    pub keys: Vec<StoredKey>,
}

/// Parse stored-curve JSON into a `Curve`, validating cardinality, component
/// counts, and time finiteness.
pub fn parse_stored_curve_json(s: &str) -> Result<Curve, StoredError> {
    let stored: StoredCurve =
        serde_json::from_str(s).map_err(|e| StoredError::Parse(e.to_string()))?;

    if stored.cardinality == 0 {
        return Err(StoredError::Invalid(format!(
            "cardinality must be > 0 in '{}'",
            stored.name
        )));
    }
    for key in &stored.keys {
        if !key.time.is_finite() {
            return Err(StoredError::Invalid(format!(
                "key time must be finite in '{}'",
                stored.name
            )));
        }
        if key.value.len() != stored.cardinality {
            return Err(StoredError::Invalid(format!(
                "key at t={} has {} components, expected {} in '{}'",
                key.time,
                key.value.len(),
                stored.cardinality,
                stored.name
            )));
        }
    }

    let mut curve = Curve::with_capacity(stored.cardinality, stored.keys.len().max(1))?;
    for key in &stored.keys {
        curve.set(key.time, &key.value)?;
    }
    Ok(curve)
}

/// Serialize a `Curve` into stored-curve JSON under the given name.
pub fn curve_to_stored_json(curve: &Curve, name: &str) -> Result<String, StoredError> {
    let keys = (0..curve.num_keys())
        .map(|i| StoredKey {
            time: curve.key_time(i),
            value: curve.key_value(i).to_vec(),
        })
        .collect();
    let stored = StoredCurve {
        name: name.to_string(),
        cardinality: curve.cardinality(),
        keys,
    };
    serde_json::to_string(&stored).map_err(|e| StoredError::Serialize(e.to_string()))
}
