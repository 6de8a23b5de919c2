use super::{rot90, Point2d, Vector2d};
use cgmath::prelude::*;

/// A closed half-plane `{ p : normal · p <= offset }`, with `normal` of unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfPlane {
    normal: Vector2d,
    offset: f64,
}

impl HalfPlane {
    /// Creates the half-plane lying to the right of the directed edge `a -> b`,
    /// i.e. the interior side of an edge of a clockwise polygon.
    ///
    /// Returns `None` if the edge has zero length.
    pub fn right_of(a: Point2d, b: Point2d) -> Option<Self> {
        let dir = b - a;
        if dir.magnitude2() <= f64::EPSILON {
            return None;
        }
        // The outward normal of a clockwise edge points to its left.
        let normal = -rot90(dir).normalize();
        Some(Self {
            normal,
            offset: normal.dot(a.to_vec()),
        })
    }

    /// The outward unit normal.
    pub fn normal(&self) -> Vector2d {
        self.normal
    }

    /// Signed distance from the boundary line; negative inside the half-plane.
    pub fn signed_distance(&self, point: Point2d) -> f64 {
        self.normal.dot(point.to_vec()) - self.offset
    }

    /// Returns true if the point is inside the half-plane
    /// after moving its boundary outward by `margin`.
    pub fn contains(&self, point: Point2d, margin: f64) -> bool {
        self.signed_distance(point) <= margin
    }
}
