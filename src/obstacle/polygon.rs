use crate::error::ConfigError;
use crate::math::{HalfPlane, Point2d};
use itertools::Itertools;

/// Tolerance used when checking that a polygon is convex.
const CONVEXITY_EPS: f64 = 1e-9;

/// A convex polygon stored as the intersection of its edge half-planes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point2d>", into = "Vec<Point2d>")
)]
pub struct ConvexPolygon {
    /// The vertices in clockwise order.
    vertices: Vec<Point2d>,
    /// One half-plane per edge, in the same order as the vertices.
    edges: Vec<HalfPlane>,
}

impl ConvexPolygon {
    /// Creates a convex polygon from its vertices, given in either winding order.
    pub fn new(vertices: impl IntoIterator<Item = Point2d>) -> Result<Self, ConfigError> {
        let mut vertices = vertices.into_iter().collect::<Vec<_>>();
        if vertices.len() < 3 {
            return Err(ConfigError::DegenerateShape(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        let area = signed_area(&vertices);
        if area.abs() <= CONVEXITY_EPS {
            return Err(ConfigError::DegenerateShape("polygon has zero area".into()));
        }
        if area > 0.0 {
            vertices.reverse();
        }

        let edges = vertices
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| HalfPlane::right_of(*a, *b))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ConfigError::DegenerateShape("polygon has a repeated vertex".into()))?;

        let convex = edges.iter().all(|edge| {
            vertices
                .iter()
                .all(|v| edge.signed_distance(*v) <= CONVEXITY_EPS)
        });
        if !convex {
            return Err(ConfigError::DegenerateShape("polygon is not convex".into()));
        }

        Ok(Self { vertices, edges })
    }

    /// Creates an axis-aligned rectangle from two opposite corners.
    pub fn rect(a: Point2d, b: Point2d) -> Result<Self, ConfigError> {
        Self::new([
            Point2d::new(a.x, a.y),
            Point2d::new(a.x, b.y),
            Point2d::new(b.x, b.y),
            Point2d::new(b.x, a.y),
        ])
    }

    /// The vertices in clockwise order.
    pub fn vertices(&self) -> &[Point2d] {
        &self.vertices
    }

    /// Returns true if the point lies inside the polygon after every edge
    /// is moved outward along its normal by `margin`.
    pub fn contains(&self, point: Point2d, margin: f64) -> bool {
        self.edges.iter().all(|edge| edge.contains(point, margin))
    }
}

impl TryFrom<Vec<Point2d>> for ConvexPolygon {
    type Error = ConfigError;

    fn try_from(vertices: Vec<Point2d>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<ConvexPolygon> for Vec<Point2d> {
    fn from(polygon: ConvexPolygon) -> Self {
        polygon.vertices
    }
}

/// The signed area of a polygon; positive when the vertices run counter-clockwise.
fn signed_area(vertices: &[Point2d]) -> f64 {
    0.5 * vertices
        .iter()
        .circular_tuple_windows()
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
}

#[cfg(test)]
mod test {
    use super::ConvexPolygon;
    use crate::error::ConfigError;
    use crate::math::Point2d;

    fn square() -> ConvexPolygon {
        ConvexPolygon::rect(Point2d::new(10.0, 10.0), Point2d::new(20.0, 20.0)).unwrap()
    }

    #[test]
    fn contains_and_inflates() {
        let sq = square();
        assert!(sq.contains(Point2d::new(15.0, 15.0), 0.0));
        assert!(sq.contains(Point2d::new(10.0, 20.0), 0.0));
        assert!(!sq.contains(Point2d::new(9.0, 15.0), 0.0));
        assert!(sq.contains(Point2d::new(7.0, 15.0), 3.0));
        assert!(!sq.contains(Point2d::new(6.0, 15.0), 3.0));
        // Offset half-planes leave square corners.
        assert!(sq.contains(Point2d::new(7.0, 7.0), 3.0));
    }

    #[test]
    fn winding_is_normalised() {
        let ccw = ConvexPolygon::new([
            Point2d::new(0.0, 0.0),
            Point2d::new(4.0, 0.0),
            Point2d::new(0.0, 4.0),
        ])
        .unwrap();
        let cw = ConvexPolygon::new([
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 4.0),
            Point2d::new(4.0, 0.0),
        ])
        .unwrap();
        for p in [Point2d::new(1.0, 1.0), Point2d::new(3.0, 3.0)] {
            assert_eq!(ccw.contains(p, 0.0), cw.contains(p, 0.0));
        }
        assert!(ccw.contains(Point2d::new(1.0, 1.0), 0.0));
        assert!(!ccw.contains(Point2d::new(3.0, 3.0), 0.0));
    }

    #[test]
    fn rejects_bad_polygons() {
        let concave = ConvexPolygon::new([
            Point2d::new(0.0, 0.0),
            Point2d::new(10.0, 0.0),
            Point2d::new(5.0, 2.0),
            Point2d::new(10.0, 10.0),
            Point2d::new(0.0, 10.0),
        ]);
        assert!(matches!(concave, Err(ConfigError::DegenerateShape(_))));

        let line = ConvexPolygon::new([
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 1.0),
            Point2d::new(2.0, 2.0),
        ]);
        assert!(line.is_err());

        let two = ConvexPolygon::new([Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]);
        assert!(two.is_err());
    }
}
