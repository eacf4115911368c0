//! A wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve and the
//! fixed-resolution tessellation built on top of it.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Dim, U1, U2};
use nalgebra::{DefaultAllocator, Matrix, Matrix2xX, OVector, RealField, Storage, Vector2};

use crate::bounding_box::BoundingBox;

/// A coordinate in model space.
pub type Point = Vector2<f64>;

/// Number of points in a tessellation.
///
/// The curve is sampled at `t = 0, 0.01, ..., 1` with both ends included.
pub const SAMPLES: usize = 101;

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a bezier curve.
///
/// The curve's control points are stored as the matrix' columns.
pub struct BezierCurve<T, R, C, S>(pub Matrix<T, R, C, S>);

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S> {
    /// Get the curves degree
    ///
    /// For example a cubic curve has degree 3 and 4 control points
    pub fn degree(&self) -> usize {
        self.0.ncols() - 1
    }
}

impl<T: RealField, R: Dim, C: Dim, S: Storage<T, R, C>> BezierCurve<T, R, C, S>
where
    // Column arithemtic required in each step
    DefaultAllocator: Allocator<T, R, U1>,

    // Buffer to store intermediate steps in
    DefaultAllocator: Allocator<T, R, C>,
{
    /// Get the point on the curve at position `t`.
    ///
    /// Each step of de castlejau's algorithm replaces the working points by the linear
    /// interpolations `(1 - t) * p[k] + t * p[k + 1]` of their neighbours until a single
    /// point is left. Two buffers are swapped between steps instead of allocating new ones.
    pub fn castlejau_eval(&self, t: T) -> OVector<T, R> {
        let t_inv = T::one() - t.clone();
        let ncols = self.0.ncols();

        let mut points = (&mut self.0.clone_owned(), &mut self.0.clone_owned());
        for step in 0..ncols {
            let (input, output) = points;
            for i in 1..(ncols - step) {
                let column = &input.column(i - 1) * t_inv.clone() + &input.column(i) * t.clone();
                output.set_column(i - 1, &column);
            }
            points = (output, input);
        }

        points.1.column(0).clone_owned()
    }
}

impl<T: RealField, C: Dim, S: Storage<T, U2, C>> BezierCurve<T, U2, C, S> {
    /// Constructs an axis aligned bounding box containing all control points.
    ///
    /// Since a bezier curve never leaves its control points' convex hull, this box also
    /// contains the whole curve.
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        BoundingBox::from_points(self.0.column_iter().map(|column| column.clone_owned()))
    }
}

/// Samples the curve described by `control_points` at [`SAMPLES`] uniformly spaced
/// parameters, in ascending order of `t`.
///
/// A curve needs at least two control points, fewer produce an empty polyline.
/// Coincident or collinear control points are not special cased.
pub fn tessellate(control_points: &[Point]) -> Vec<Point> {
    if control_points.len() < 2 {
        return Vec::new();
    }

    let curve = BezierCurve(Matrix2xX::from_columns(control_points));
    let last = (SAMPLES - 1) as f64;
    (0..SAMPLES)
        .map(|i| curve.castlejau_eval(i as f64 / last))
        .collect()
}
