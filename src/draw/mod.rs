//! Defines [`DrawScene`] and implements it on various drawing contexts.
//!
//! The editor itself never draws. A renderer reads the published state after each
//! command and hands it to a drawing context through [`DrawScene::add_editor`].
use crate::bezier::Point;
use crate::curve::CurveId;
use crate::editor::Editor;

pub mod svg;

/// RGB color with channels between `0` and `1`.
pub type Color = [f64; 3];

/// Control point colors, indexed by [`CurveId::index`]: red and blue
pub const CONTROL_POINT_COLORS: [Color; 2] = [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];

/// Color of the polygon connecting a curve's control points
pub const CONTROL_POLYGON_COLOR: Color = [0.7, 0.7, 0.7];

/// Tessellation colors, indexed by [`CurveId::index`]: green and yellow
pub const CURVE_COLORS: [Color; 2] = [[0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];

/// Color of intersection markers
pub const INTERSECTION_COLOR: Color = [1.0, 1.0, 1.0];

/// Scene background
pub const BACKGROUND_COLOR: Color = [0.0, 0.0, 0.0];

/// Diameter of control point markers in pixels
pub const CONTROL_POINT_SIZE: f64 = 10.0;

/// Diameter of intersection markers in pixels
pub const INTERSECTION_SIZE: f64 = 12.0;

/// Draw the editor's state on different "drawing contexts" with ease.
///
/// Implementors only provide the two primitives, the scene layout comes for free.
pub trait DrawScene {
    /// Add a marker of `size` pixels for every point.
    fn add_points(&mut self, points: &[Point], color: Color, size: f64);

    /// Add an open polyline through `points`. Less than two points draw nothing.
    fn add_polyline(&mut self, points: &[Point], color: Color);

    /// Add everything a renderer shows for `editor`.
    ///
    /// Each curve adds its control points, its control polygon and its tessellation,
    /// curve 1 before curve 2. Intersections are added last so they stay on top.
    fn add_editor(&mut self, editor: &Editor) {
        for id in CurveId::ALL {
            let curve = editor.curve(id);
            self.add_points(
                curve.control_points(),
                CONTROL_POINT_COLORS[id.index()],
                CONTROL_POINT_SIZE,
            );
            self.add_polyline(curve.control_points(), CONTROL_POLYGON_COLOR);
            self.add_polyline(curve.tessellation(), CURVE_COLORS[id.index()]);
        }
        self.add_points(editor.intersections(), INTERSECTION_COLOR, INTERSECTION_SIZE);
    }
}
