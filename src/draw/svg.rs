//! Draw the editor's state into a svg document

use std::fmt::{self, Display, Formatter, Write};

use crate::bezier::Point;
use crate::draw::{Color, DrawScene, BACKGROUND_COLOR};
use crate::viewport::Viewport;

/// Formats a [`Color`] as svg `rgb(...)` value.
struct Rgb(Color);

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        write!(f, "rgb({},{},{})", r, g, b)
    }
}

/// Collects svg elements in pixel coordinates of a [`Viewport`].
///
/// Printing the scene via [`Display`] yields a complete svg document
/// with the background filled in.
///
/// ```
/// use bezier_crossings::draw::svg::SvgScene;
/// use bezier_crossings::draw::DrawScene;
/// use bezier_crossings::{Editor, Point, Viewport};
///
/// let mut editor = Editor::default();
/// editor.place_point(Point::new(-1.0, 0.0)).unwrap();
/// editor.place_point(Point::new(1.0, 0.0)).unwrap();
///
/// let mut scene = SvgScene::new(Viewport::new(400.0, 400.0, 2.0));
/// scene.add_editor(&editor);
/// assert!(scene.to_string().starts_with("<svg"));
/// ```
pub struct SvgScene {
    viewport: Viewport,
    elements: String,
}

impl SvgScene {
    /// Creates an empty scene covering `viewport`.
    pub fn new(viewport: Viewport) -> SvgScene {
        SvgScene {
            viewport,
            elements: String::new(),
        }
    }

    /// The elements added so far, without the surrounding document
    pub fn elements(&self) -> &str {
        &self.elements
    }
}

impl DrawScene for SvgScene {
    fn add_points(&mut self, points: &[Point], color: Color, size: f64) {
        for point in points {
            let (x, y) = self.viewport.to_device(point);
            let _ = writeln!(
                self.elements,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                x,
                y,
                size / 2.0,
                Rgb(color)
            );
        }
    }

    fn add_polyline(&mut self, points: &[Point], color: Color) {
        if points.len() < 2 {
            return;
        }
        let _ = write!(self.elements, "<polyline points=\"");
        for (i, point) in points.iter().enumerate() {
            let (x, y) = self.viewport.to_device(point);
            let separator = if i == 0 { "" } else { " " };
            let _ = write!(self.elements, "{}{},{}", separator, x, y);
        }
        let _ = writeln!(
            self.elements,
            "\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
            Rgb(color)
        );
    }
}

impl Display for SvgScene {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Viewport { width, height, .. } = self.viewport;
        writeln!(
            f,
            "<svg viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            width, height
        )?;
        writeln!(
            f,
            "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            width,
            height,
            Rgb(BACKGROUND_COLOR)
        )?;
        f.write_str(&self.elements)?;
        writeln!(f, "</svg>")
    }
}
