use crate::math::Point2d;
use crate::{Cell, NodeId};

/// The canonical key of a duplicate-suppression bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub x: i64,
    pub y: i64,
}

/// Maps a continuous position to the bucket it is merged into.
///
/// Positions closer than half of `resolution` to the same bucket centre share
/// a key. The key is used for bookkeeping only and never enters a cost.
pub fn quantize(point: Point2d, resolution: f64) -> BucketKey {
    BucketKey {
        x: (point.x / resolution).round() as i64,
        y: (point.y / resolution).round() as i64,
    }
}

/// A state discovered by the search.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    /// The continuous position of the state.
    pub pos: Point2d,
    /// The cost of the best known path from the start.
    pub g: f64,
    /// The heuristic estimate of the remaining cost.
    pub h: f64,
    /// The predecessor on the best known path.
    pub parent: Option<NodeId>,
    /// Whether the node has been popped and expanded.
    pub finalized: bool,
}

impl SearchNode {
    pub fn new(pos: Point2d, g: f64, h: f64, parent: Option<NodeId>) -> Self {
        Self {
            pos,
            g,
            h,
            parent,
            finalized: false,
        }
    }

    /// The estimated total cost of a path through this node.
    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// The grid cell the node is displayed in.
    pub fn cell(&self) -> Cell {
        Cell::nearest(self.pos)
    }
}

#[cfg(test)]
mod test {
    use super::{quantize, BucketKey};
    use crate::math::Point2d;

    #[test]
    fn half_unit_buckets() {
        let key = quantize(Point2d::new(3.0, 4.0), 0.5);
        assert_eq!(key, BucketKey { x: 6, y: 8 });
        assert_eq!(quantize(Point2d::new(3.1, 3.9), 0.5), key);
        assert_eq!(quantize(Point2d::new(3.0 + 1e-9, 4.0 - 1e-9), 0.5), key);
        assert_ne!(quantize(Point2d::new(3.5, 4.0), 0.5), key);
        assert_eq!(quantize(Point2d::new(-1.0, -0.5), 0.5), BucketKey { x: -2, y: -1 });
    }
}
