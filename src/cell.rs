use crate::math::Point2d;
use std::fmt;

/// A cell of the workspace grid.
///
/// Rows and columns are 1-indexed. Row 1 is the bottom edge of the workspace,
/// so the row is the `y` coordinate and the column the `x` coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Creates a new cell.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The centre of the cell in continuous coordinates.
    pub fn centre(&self) -> Point2d {
        Point2d::new(self.col as f64, self.row as f64)
    }

    /// The cell containing a continuous point, rounding to the nearest centre.
    pub fn nearest(point: Point2d) -> Self {
        Self {
            row: point.y.round() as i32,
            col: point.x.round() as i32,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
