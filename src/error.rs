//! Errors reported by rejected editing commands.
//!
//! A rejected command never touches control points, tessellations or intersections.

use thiserror::Error;

use crate::curve::CurveId;

/// Reasons an editing command was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The curve already holds all of its control points.
    #[error("curve {curve} already has {capacity} control points")]
    CapacityExceeded {
        /// Curve the point was meant for
        curve: CurveId,
        /// Maximum number of control points
        capacity: usize,
    },

    /// A control point index outside of the curve's current points.
    #[error("curve {curve} has no control point {index} (it has {len})")]
    IndexOutOfRange {
        /// Addressed curve
        curve: CurveId,
        /// Requested index
        index: usize,
        /// Number of control points the curve holds
        len: usize,
    },
}
