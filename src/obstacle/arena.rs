use super::{ConvexPolygon, ObstacleSet, Shape};
use crate::error::ConfigError;
use crate::math::Point2d;

impl ObstacleSet {
    /// The obstacles of the default 300 x 200 arena: a circle, an ellipse,
    /// a rotated rectangle, a rhombus and a concave hexagon.
    ///
    /// Fails only if one of the built-in polygons is rejected as degenerate.
    pub fn arena() -> Result<Self, ConfigError> {
        let polygon = |points: &[(f64, f64)]| -> Result<Shape, ConfigError> {
            let polygon = ConvexPolygon::new(points.iter().map(|&(x, y)| Point2d::new(x, y)))?;
            Ok(polygon.into())
        };

        Ok(ObstacleSet::new()
            .with(Shape::circle(Point2d::new(225.0, 150.0), 25.0))
            .with(Shape::ellipse(Point2d::new(150.0, 100.0), 40.0, 20.0))
            .with(polygon(&[
                (95.0, 30.0),
                (100.0, 38.66),
                (35.05, 76.16),
                (30.05, 67.5),
            ])?)
            .with(polygon(&[
                (225.0, 10.0),
                (250.0, 25.0),
                (225.0, 40.0),
                (200.0, 25.0),
            ])?)
            // The concave hexagon, split at its reflex vertex (50, 150).
            .with(polygon(&[(20.0, 120.0), (25.0, 185.0), (50.0, 150.0)])?)
            .with(polygon(&[
                (25.0, 185.0),
                (75.0, 185.0),
                (100.0, 150.0),
                (75.0, 120.0),
                (50.0, 150.0),
            ])?))
    }
}
