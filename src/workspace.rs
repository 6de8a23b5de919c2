use crate::util::Interval;
use crate::Cell;

/// Width of the default arena, in cells.
pub const ARENA_WIDTH: i32 = 300;

/// Height of the default arena, in cells.
pub const ARENA_HEIGHT: i32 = 200;

/// The fixed rectangular arena the robot moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workspace {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
}

impl Workspace {
    /// Creates a workspace of `width` columns and `height` rows.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The valid rows once `margin` cells are reserved along each edge.
    pub fn rows(&self, margin: i32) -> Interval<i32> {
        Interval::new(1, self.height).shrink(margin)
    }

    /// The valid columns once `margin` cells are reserved along each edge.
    pub fn cols(&self, margin: i32) -> Interval<i32> {
        Interval::new(1, self.width).shrink(margin)
    }

    /// Returns true if the cell lies in the workspace and at least
    /// `margin` cells away from every edge row and column.
    pub fn contains(&self, cell: Cell, margin: i32) -> bool {
        self.rows(margin).contains(cell.row) && self.cols(margin).contains(cell.col)
    }

    /// Iterates over every cell, row by row from the bottom.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (1..=self.height).flat_map(move |row| (1..=width).map(move |col| Cell::new(row, col)))
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}
