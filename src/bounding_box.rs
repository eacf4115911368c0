//! Axis aligned bounding boxes in the plane.

use nalgebra::{RealField, Vector2};

/// Axis aligned rectangle given by its lower left and upper right corner.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: RealField> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,
    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Smallest box containing every point, `None` if there are no points.
    pub fn from_points<I: IntoIterator<Item = Vector2<T>>>(points: I) -> Option<BoundingBox<T>> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut min = first.clone();
        let mut max = first;
        for p in points {
            if min.x > p.x {
                min.x = p.x.clone();
            }
            if min.y > p.y {
                min.y = p.y.clone();
            }
            if max.x < p.x {
                max.x = p.x.clone();
            }
            if max.y < p.y {
                max.y = p.y.clone();
            }
        }
        Some(BoundingBox { min, max })
    }

    /// Checks whether `point` lies inside the box, borders included.
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Grows the box by `margin` in every direction.
    pub fn inflate(&self, margin: T) -> BoundingBox<T> {
        let margin = Vector2::new(margin.clone(), margin);
        BoundingBox {
            min: &self.min - &margin,
            max: &self.max + &margin,
        }
    }
}

impl<T: RealField> From<[Vector2<T>; 2]> for BoundingBox<T> {
    fn from([min, max]: [Vector2<T>; 2]) -> Self {
        BoundingBox { min, max }
    }
}
