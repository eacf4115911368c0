//! A single editable curve: its control points and the tessellation derived from them.

use nalgebra::Matrix2xX;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

use crate::bezier::{tessellate, BezierCurve, Point};
use crate::bounding_box::BoundingBox;
use crate::error::EditError;

/// Number of control points of a cubic curve.
pub const CUBIC: usize = 4;

/// Control points stored inline, a cubic curve never needs more.
pub type ControlPoints = SmallVec<[Point; CUBIC]>;

/// Identifies one of the two curves being edited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// Curve 1, hit tested first
    First,
    /// Curve 2
    Second,
}

impl CurveId {
    /// Both curves in hit testing order.
    pub const ALL: [CurveId; 2] = [CurveId::First, CurveId::Second];

    /// Position of the curve in arrays ordered like [`CurveId::ALL`].
    pub fn index(self) -> usize {
        match self {
            CurveId::First => 0,
            CurveId::Second => 1,
        }
    }

    /// The user facing curve number, `1` or `2`.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// The respective other curve.
    pub fn other(self) -> CurveId {
        match self {
            CurveId::First => CurveId::Second,
            CurveId::Second => CurveId::First,
        }
    }
}

impl Display for CurveId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Control points of a cubic bezier curve together with their tessellation.
///
/// The tessellation is recomputed whenever a control point changes,
/// so it always matches [`tessellate`] applied to the current control points.
#[derive(Clone, Debug)]
pub struct Curve {
    id: CurveId,
    control_points: ControlPoints,
    tessellation: Vec<Point>,
}

impl Curve {
    /// Creates a curve without any control points.
    pub fn new(id: CurveId) -> Curve {
        Curve {
            id,
            control_points: SmallVec::new(),
            tessellation: Vec::new(),
        }
    }

    /// Which of the two curves this is
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Control points in insertion order
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Sampled polyline, empty while the curve has less than two control points
    pub fn tessellation(&self) -> &[Point] {
        &self.tessellation
    }

    /// Number of control points placed so far
    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    /// Whether no control point has been placed yet
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Whether all [`CUBIC`] control points are placed
    pub fn is_complete(&self) -> bool {
        self.control_points.len() == CUBIC
    }

    /// Adds a control point after the existing ones.
    ///
    /// Fails with [`EditError::CapacityExceeded`] once the curve holds [`CUBIC`] points.
    pub fn append_point(&mut self, point: Point) -> Result<(), EditError> {
        if self.is_complete() {
            return Err(EditError::CapacityExceeded {
                curve: self.id,
                capacity: CUBIC,
            });
        }
        self.control_points.push(point);
        self.retessellate();
        Ok(())
    }

    /// Moves the control point at `index` to `point`, keeping the order of all points.
    pub fn set_point(&mut self, index: usize, point: Point) -> Result<(), EditError> {
        let len = self.control_points.len();
        let slot = self
            .control_points
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange {
                curve: self.id,
                index,
                len,
            })?;
        *slot = point;
        self.retessellate();
        Ok(())
    }

    /// Finds the first control point within `radius` of `point`.
    pub fn hit_test(&self, point: &Point, radius: f64) -> Option<usize> {
        self.control_points
            .iter()
            .position(|p| (p - point).norm() <= radius)
    }

    /// Box around the control points, which also contains the whole curve.
    pub fn bounding_box(&self) -> Option<BoundingBox<f64>> {
        if self.control_points.is_empty() {
            return None;
        }
        BezierCurve(Matrix2xX::from_columns(&self.control_points[..])).bounding_box()
    }

    fn retessellate(&mut self) {
        self.tessellation = tessellate(&self.control_points);
        log::debug!(
            "curve {}: {} control points, {} samples",
            self.id,
            self.control_points.len(),
            self.tessellation.len()
        );
    }
}
