//! Static obstacle primitives and the sets they are grouped into.

use crate::math::{Point2d, Vector2d};
use cgmath::prelude::*;
pub use polygon::ConvexPolygon;

mod arena;
mod polygon;

/// A single obstacle primitive, defined by a closed-form inequality in (x, y).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A disc of the given radius.
    Circle { centre: Point2d, radius: f64 },
    /// An axis-aligned ellipse with semi-axes `semi_axes.x` and `semi_axes.y`.
    Ellipse { centre: Point2d, semi_axes: Vector2d },
    /// A convex polygon; concave obstacles are a union of several of these.
    Polygon(ConvexPolygon),
}

impl Shape {
    /// Creates a circle.
    pub fn circle(centre: Point2d, radius: f64) -> Self {
        Self::Circle { centre, radius }
    }

    /// Creates an axis-aligned ellipse.
    pub fn ellipse(centre: Point2d, semi_x: f64, semi_y: f64) -> Self {
        Self::Ellipse {
            centre,
            semi_axes: Vector2d::new(semi_x, semi_y),
        }
    }

    /// Returns true if the point is inside the shape once its boundary is
    /// pushed outward by `margin`.
    pub fn contains(&self, point: Point2d, margin: f64) -> bool {
        match self {
            Shape::Circle { centre, radius } => {
                let r = radius + margin;
                point.distance2(*centre) <= r * r
            }
            Shape::Ellipse { centre, semi_axes } => {
                let d = point - *centre;
                let a = semi_axes.x + margin;
                let b = semi_axes.y + margin;
                (d.x * d.x) / (a * a) + (d.y * d.y) / (b * b) <= 1.0
            }
            Shape::Polygon(polygon) => polygon.contains(point, margin),
        }
    }
}

impl From<ConvexPolygon> for Shape {
    fn from(polygon: ConvexPolygon) -> Self {
        Self::Polygon(polygon)
    }
}

/// An immutable collection of obstacle shapes.
///
/// A point is an obstacle if it lies inside any of the shapes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleSet {
    shapes: Vec<Shape>,
}

impl ObstacleSet {
    /// Creates an empty obstacle set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a shape, consuming and returning the set.
    pub fn with(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    /// The shapes in the set.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns true if the set contains no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns true if the point lies inside any shape inflated by `margin`.
    pub fn contains(&self, point: Point2d, margin: f64) -> bool {
        self.shapes.iter().any(|shape| shape.contains(point, margin))
    }
}

impl FromIterator<Shape> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}
