//! Mathematical structs and functions.

use cgmath::{Point2, Vector2};
pub use halfplane::HalfPlane;

mod halfplane;

/// A 2D point. `x` runs along the columns and `y` along the rows.
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;

/// Rotates a vector 90 degrees clockwise.
pub fn rot90(vec: Vector2d) -> Vector2d {
    Vector2d::new(vec.y, -vec.x)
}
