//! The interaction controller.
//!
//! [`Editor`] owns both curves and is their only mutator. Every command runs to
//! completion, including re-tessellation and a full intersection recompute, before it
//! returns. Renderers read the published state between commands.

use crate::bezier::Point;
use crate::curve::{Curve, CurveId};
use crate::error::EditError;
use crate::intersect::intersect;
use crate::settings::Settings;

/// Whether a control point is currently being dragged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    /// Nothing grabbed
    #[default]
    Idle,

    /// The control point `index` of `curve` follows the pointer
    Dragging {
        /// Curve owning the grabbed point
        curve: CurveId,
        /// Index of the grabbed point among the curve's control points
        index: usize,
    },
}

/// Pointer button of a press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    /// Grabs a point or places a new one
    Primary,
    /// Grabs a point or switches the active curve
    Secondary,
}

/// Discrete user input, already converted into model space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intent {
    /// A button went down at `position`
    Press {
        /// Pointer position
        position: Point,
        /// Pressed button
        button: Button,
    },
    /// The pointer moved to `position`
    Move {
        /// Pointer position
        position: Point,
    },
    /// The button was released
    Release,
    /// Explicit request to edit the other curve
    SwitchCurve,
}

/// Two editable curves, the crossings between them and the interaction state.
#[derive(Clone, Debug)]
pub struct Editor {
    curves: [Curve; 2],
    intersections: Vec<Point>,
    active: CurveId,
    interaction: Interaction,
    settings: Settings,
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(Settings::default())
    }
}

impl Editor {
    /// Starts a session with two empty curves, curve 1 being active.
    pub fn new(settings: Settings) -> Editor {
        Editor {
            curves: CurveId::ALL.map(Curve::new),
            intersections: Vec::new(),
            active: CurveId::First,
            interaction: Interaction::Idle,
            settings,
        }
    }

    /// Settings the editor was created with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /* Queries */

    /// Full curve model for `id`
    pub fn curve(&self, id: CurveId) -> &Curve {
        &self.curves[id.index()]
    }

    /// Control points of curve `id` in insertion order
    pub fn control_points(&self, id: CurveId) -> &[Point] {
        self.curve(id).control_points()
    }

    /// Tessellation of curve `id`
    pub fn tessellation(&self, id: CurveId) -> &[Point] {
        self.curve(id).tessellation()
    }

    /// Crossings between both tessellations
    pub fn intersections(&self) -> &[Point] {
        &self.intersections
    }

    /// Curve receiving newly placed points
    pub fn active_curve(&self) -> CurveId {
        self.active
    }

    /// Current drag state
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Finds the first control point within the configured radius of `position`.
    ///
    /// Curve 1 is searched before curve 2, and earlier points before later ones.
    pub fn hit_test(&self, position: &Point) -> Option<(CurveId, usize)> {
        let radius = self.settings.point_radius;
        CurveId::ALL.into_iter().find_map(|id| {
            self.curve(id)
                .hit_test(position, radius)
                .map(|index| (id, index))
        })
    }

    /* Commands */

    /// Appends `position` to the active curve.
    pub fn place_point(&mut self, position: Point) -> Result<(), EditError> {
        let id = self.active;
        if let Err(e) = self.curves[id.index()].append_point(position) {
            log::warn!("point ({}, {}) rejected: {}", position.x, position.y, e);
            return Err(e);
        }
        self.recompute_intersections();

        if self.settings.advance_on_complete && self.curve(id).is_complete() {
            self.active = id.other();
            log::info!("curve {} complete, continuing with curve {}", id, self.active);
        }
        Ok(())
    }

    /// Grabs the control point under `position`, if there is one.
    ///
    /// Returns whether a point was captured. A previous drag is released first.
    pub fn begin_drag(&mut self, position: Point) -> bool {
        self.end_drag();
        match self.hit_test(&position) {
            Some((curve, index)) => {
                log::info!("dragging point {} of curve {}", index, curve);
                self.interaction = Interaction::Dragging { curve, index };
                true
            }
            None => false,
        }
    }

    /// Moves the grabbed control point to `position`. Does nothing while idle.
    pub fn update_drag(&mut self, position: Point) -> Result<(), EditError> {
        let (curve, index) = match self.interaction {
            Interaction::Dragging { curve, index } => (curve, index),
            Interaction::Idle => {
                log::debug!("move without a grabbed point ignored");
                return Ok(());
            }
        };

        if let Err(e) = self.curves[curve.index()].set_point(index, position) {
            log::warn!("drag update rejected: {}", e);
            return Err(e);
        }
        self.recompute_intersections();
        Ok(())
    }

    /// Releases the grabbed control point, leaving the geometry as it is.
    pub fn end_drag(&mut self) {
        if let Interaction::Dragging { curve, index } = self.interaction {
            log::info!("released point {} of curve {}", index, curve);
        }
        self.interaction = Interaction::Idle;
    }

    /// Makes the other curve the target of [`Editor::place_point`].
    pub fn switch_active_curve(&mut self) {
        self.active = self.active.other();
        log::info!("active curve is now {}", self.active);
    }

    /// Dispatches a user intent to the commands above.
    ///
    /// Presses grab a nearby control point first. Only if none is hit, the primary button
    /// places a point and the secondary one switches curves.
    pub fn handle(&mut self, intent: Intent) -> Result<(), EditError> {
        match intent {
            Intent::Press { position, button } => {
                if self.begin_drag(position) {
                    return Ok(());
                }
                match button {
                    Button::Primary => self.place_point(position),
                    Button::Secondary => {
                        self.switch_active_curve();
                        Ok(())
                    }
                }
            }
            Intent::Move { position } => self.update_drag(position),
            Intent::Release => {
                self.end_drag();
                Ok(())
            }
            Intent::SwitchCurve => {
                self.switch_active_curve();
                Ok(())
            }
        }
    }

    fn recompute_intersections(&mut self) {
        let [first, second] = &self.curves;
        self.intersections = intersect(first.tessellation(), second.tessellation());
        log::debug!("{} intersections", self.intersections.len());
    }
}
