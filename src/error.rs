//! Error types for the GRN model and cell lifecycle.
//!
//! Both variants are precondition violations by the caller and are
//! unrecoverable at this layer: a wrongly-sized state vector or a
//! geometrically impossible division must abort the offending agent's
//! tick rather than be patched up, since a corrupted state vector would
//! propagate silently through later steps and divisions.

use thiserror::Error;

/// Errors surfaced by derivative evaluation, integration, and division.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A state or derivative vector did not have the expected number of
    /// components. Never silently truncated or padded.
    #[error("state vector has {actual} components, expected {expected}")]
    Dimensionality { expected: usize, actual: usize },

    /// Division was invoked on a capsule too short to split: one of the
    /// daughter segment lengths came out non-positive. Clamping here would
    /// mask an upstream length-threshold bug, so the error is surfaced.
    #[error("division produced non-positive segment lengths (L1 = {l1}, L2 = {l2})")]
    InvalidGeometry { l1: f32, l2: f32 },
}
