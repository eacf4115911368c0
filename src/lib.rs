#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bezier;
pub mod bounding_box;
pub mod curve;
pub mod draw;
pub mod editor;
pub mod error;
pub mod intersect;
pub mod settings;
pub mod viewport;

pub use crate::bezier::{tessellate, BezierCurve, Point, SAMPLES};
pub use crate::curve::{Curve, CurveId, CUBIC};
pub use crate::editor::{Button, Editor, Intent, Interaction};
pub use crate::error::EditError;
pub use crate::intersect::{intersect, segment_intersection, EPSILON};
pub use crate::settings::Settings;
pub use crate::viewport::Viewport;
