//! Crossings between two polylines.
//!
//! Every segment of one polyline is tested against every segment of the other one.
//! Polylines meeting exactly at a shared vertex report that crossing once for each
//! adjacent segment pair, so results may contain (nearly) coincident points.

use crate::bezier::Point;

/// Tolerance used both to reject near parallel segments and to pad the segments'
/// coordinate ranges when checking whether a crossing lies on them.
pub const EPSILON: f64 = 1e-6;

/// Computes where segment `p1 p2` crosses segment `q1 q2`.
///
/// Both segments are extended to lines and intersected using their determinant form.
/// Lines whose determinant is smaller than [`EPSILON`] count as parallel and never
/// intersect, even if they overlap. The crossing is only accepted if it lies within
/// both segments' x and y ranges, each widened by [`EPSILON`].
pub fn segment_intersection(p1: &Point, p2: &Point, q1: &Point, q2: &Point) -> Option<Point> {
    let (x1, y1, x2, y2) = (p1.x, p1.y, p2.x, p2.y);
    let (x3, y3, x4, y4) = (q1.x, q1.y, q2.x, q2.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < EPSILON {
        return None;
    }

    let det_p = x1 * y2 - y1 * x2;
    let det_q = x3 * y4 - y3 * x4;
    let px = (det_p * (x3 - x4) - (x1 - x2) * det_q) / denom;
    let py = (det_p * (y3 - y4) - (y1 - y2) * det_q) / denom;

    let between = |v: f64, a: f64, b: f64| v >= a.min(b) - EPSILON && v <= a.max(b) + EPSILON;
    if between(px, x1, x2) && between(px, x3, x4) && between(py, y1, y2) && between(py, y3, y4) {
        Some(Point::new(px, py))
    } else {
        None
    }
}

/// Collects all crossings between the polylines `a` and `b`.
///
/// The result is ordered by `a`'s segments first and `b`'s segments second.
/// Polylines with less than two points have no segments and yield nothing.
pub fn intersect(a: &[Point], b: &[Point]) -> Vec<Point> {
    let mut crossings = Vec::new();
    for p in a.windows(2) {
        for q in b.windows(2) {
            if let Some(crossing) = segment_intersection(&p[0], &p[1], &q[0], &q[1]) {
                crossings.push(crossing);
            }
        }
    }
    crossings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::tessellate;
    use approx::{assert_relative_eq, relative_eq};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn crossing_segments() {
        let crossing = segment_intersection(&pt(0.0, 0.0), &pt(2.0, 2.0), &pt(0.0, 2.0), &pt(2.0, 0.0));
        assert_relative_eq!(crossing.unwrap(), pt(1.0, 1.0), epsilon = 1e-4);

        let crossing = segment_intersection(&pt(-1.0, 0.0), &pt(3.0, 0.0), &pt(0.5, -2.0), &pt(1.5, 2.0));
        assert_relative_eq!(crossing.unwrap(), pt(1.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn parallel_segments() {
        assert!(segment_intersection(&pt(0.0, 0.0), &pt(1.0, 1.0), &pt(0.0, 1.0), &pt(1.0, 2.0)).is_none());
        // Overlapping but parallel segments are skipped as well
        assert!(segment_intersection(&pt(0.0, 0.0), &pt(2.0, 0.0), &pt(1.0, 0.0), &pt(3.0, 0.0)).is_none());
    }

    #[test]
    fn lines_cross_outside_segments() {
        assert!(segment_intersection(&pt(0.0, 0.0), &pt(1.0, 0.0), &pt(2.0, -1.0), &pt(2.0, 1.0)).is_none());
        assert!(segment_intersection(&pt(0.0, 0.0), &pt(1.0, 0.0), &pt(1.001, -1.0), &pt(1.001, 1.0)).is_none());
    }

    #[test]
    fn touching_endpoints() {
        let crossing = segment_intersection(&pt(0.0, 0.0), &pt(1.0, 0.0), &pt(1.0, -1.0), &pt(1.0, 1.0));
        assert_eq!(crossing, Some(pt(1.0, 0.0)));

        // Misses by less than the tolerance
        let crossing = segment_intersection(&pt(0.0, 0.0), &pt(1.0, 0.0), &pt(1.0 + 5e-7, -1.0), &pt(1.0 + 5e-7, 1.0));
        assert!(crossing.is_some());
    }

    #[test]
    fn short_polylines() {
        let line = [pt(0.0, 0.0), pt(1.0, 1.0)];
        assert!(intersect(&[], &line).is_empty());
        assert!(intersect(&line, &[pt(0.0, 1.0)]).is_empty());
    }

    #[test]
    fn nested_iteration_order() {
        let horizontal = [pt(0.0, 0.0), pt(4.0, 0.0)];
        let zigzag = [pt(0.5, 1.0), pt(1.5, -1.0), pt(2.5, 1.0), pt(3.5, -1.0)];
        let crossings = intersect(&horizontal, &zigzag);
        assert_eq!(crossings.len(), 3);
        assert_relative_eq!(crossings[0], pt(1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(crossings[1], pt(2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(crossings[2], pt(3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn shared_vertex_is_reported_twice() {
        let a = [pt(-1.0, 0.0), pt(0.0, 0.0), pt(1.0, 0.0)];
        let b = [pt(0.0, -1.0), pt(0.0, 1.0)];
        let crossings = intersect(&a, &b);
        assert_eq!(crossings, vec![pt(0.0, 0.0), pt(0.0, 0.0)]);
    }

    #[test]
    fn symmetric() {
        let a = tessellate(&[pt(-1.0, -1.0), pt(-1.0, 1.0), pt(1.0, -1.0), pt(1.0, 1.0)]);
        let b = tessellate(&[pt(-1.0, 0.5), pt(1.0, 0.5), pt(1.0, -0.5), pt(-1.0, -0.5)]);

        let ab = intersect(&a, &b);
        let ba = intersect(&b, &a);
        assert!(!ab.is_empty());
        assert_eq!(ab.len(), ba.len());
        for p in ab.iter() {
            assert!(ba.iter().any(|q| relative_eq!(*p, *q, epsilon = 1e-9)));
        }
        for q in ba.iter() {
            assert!(ab.iter().any(|p| relative_eq!(*p, *q, epsilon = 1e-9)));
        }
    }
}
