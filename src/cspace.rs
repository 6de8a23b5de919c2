//! The configuration space of a disc-shaped robot.

use crate::config::inflation_margin;
use crate::error::ConfigError;
use crate::math::Point2d;
use crate::{Cell, ObstacleSet, Workspace};
use std::sync::Arc;

/// Answers membership queries for a robot of a given radius and clearance.
///
/// Obstacles are inflated by `radius + clearance` and the same margin is
/// reserved along the edges of the workspace, so that the robot can be
/// planned for as a single point.
#[derive(Clone, Debug)]
pub struct ConfigSpace {
    /// The arena bounds.
    workspace: Workspace,
    /// The static obstacles, shared between configurations.
    obstacles: Arc<ObstacleSet>,
    /// The inflation margin, `radius + clearance`, in cells.
    margin: i32,
}

impl ConfigSpace {
    /// Builds the configuration space for a robot of the given radius and clearance.
    pub fn new(
        workspace: Workspace,
        obstacles: impl Into<Arc<ObstacleSet>>,
        radius: i32,
        clearance: i32,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            workspace,
            obstacles: obstacles.into(),
            margin: inflation_margin(radius, clearance)?,
        })
    }

    /// The arena bounds.
    pub fn workspace(&self) -> Workspace {
        self.workspace
    }

    /// The static obstacles.
    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// The inflation margin, `radius + clearance`.
    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Returns true if the robot fits inside the workspace when centred on the cell.
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.workspace.contains(cell, self.margin)
    }

    /// Returns true if the cell lies inside any inflated obstacle.
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.is_obstacle_at(cell.centre())
    }

    /// Returns true if the robot can occupy the cell.
    pub fn is_free(&self, cell: Cell) -> bool {
        self.is_valid(cell) && !self.is_obstacle(cell)
    }

    /// Continuous counterpart of [`is_valid`](Self::is_valid).
    pub fn is_valid_at(&self, point: Point2d) -> bool {
        let margin = self.margin as f64;
        let x_range = 1.0 + margin..=self.workspace.width as f64 - margin;
        let y_range = 1.0 + margin..=self.workspace.height as f64 - margin;
        x_range.contains(&point.x) && y_range.contains(&point.y)
    }

    /// Continuous counterpart of [`is_obstacle`](Self::is_obstacle).
    pub fn is_obstacle_at(&self, point: Point2d) -> bool {
        self.obstacles.contains(point, self.margin as f64)
    }

    /// Returns true if the robot can occupy the point.
    pub fn is_free_at(&self, point: Point2d) -> bool {
        self.is_valid_at(point) && !self.is_obstacle_at(point)
    }

    /// Every cell of the workspace that lies inside an inflated obstacle,
    /// row by row from the bottom.
    pub fn obstacle_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.workspace
            .cells()
            .filter(move |cell| self.is_obstacle(*cell))
    }
}

#[cfg(test)]
mod test {
    use super::ConfigSpace;
    use crate::error::ConfigError;
    use crate::math::Point2d;
    use crate::{Cell, ObstacleSet, Shape, Workspace};

    fn disc_space(radius: i32, clearance: i32) -> ConfigSpace {
        let obstacles = ObstacleSet::new().with(Shape::circle(Point2d::new(20.0, 20.0), 5.0));
        ConfigSpace::new(Workspace::new(40, 40), obstacles, radius, clearance).unwrap()
    }

    #[test]
    fn rejects_negative_parameters() {
        let ws = Workspace::new(10, 10);
        assert_eq!(
            ConfigSpace::new(ws, ObstacleSet::new(), -1, 0).unwrap_err(),
            ConfigError::NegativeRadius(-1)
        );
        assert_eq!(
            ConfigSpace::new(ws, ObstacleSet::new(), 0, -2).unwrap_err(),
            ConfigError::NegativeClearance(-2)
        );
    }

    #[test]
    fn oversized_margin() {
        let ws = Workspace::new(10, 10);
        assert_eq!(
            ConfigSpace::new(ws, ObstacleSet::new(), i32::MAX, 1).unwrap_err(),
            ConfigError::MarginOverflow(i32::MAX, 1)
        );

        // A margin wider than the workspace leaves no valid cell.
        let cs = ConfigSpace::new(ws, ObstacleSet::new(), i32::MAX, 0).unwrap();
        assert!(ws.cells().all(|cell| !cs.is_valid(cell)));
        assert!(!cs.is_valid_at(Point2d::new(5.0, 5.0)));
    }

    #[test]
    fn circle_inflated_by_radius_and_clearance() {
        let cs = disc_space(2, 1);
        // Boundary at 5 + 2 + 1 = 8 cells from the centre.
        assert!(cs.is_obstacle(Cell::new(20, 27)));
        assert!(cs.is_obstacle(Cell::new(20, 28)));
        assert!(!cs.is_obstacle(Cell::new(20, 29)));
        assert!(cs.is_obstacle(Cell::new(12, 20)));
        assert!(!cs.is_obstacle(Cell::new(11, 20)));
    }

    #[test]
    fn edge_margin() {
        let cs = disc_space(2, 1);
        assert!(!cs.is_valid(Cell::new(3, 10)));
        assert!(cs.is_valid(Cell::new(4, 10)));
        assert!(cs.is_valid(Cell::new(37, 10)));
        assert!(!cs.is_valid(Cell::new(38, 10)));
        assert!(!cs.is_valid(Cell::new(10, 3)));
        assert!(cs.is_valid(Cell::new(10, 4)));
        assert!(cs.is_valid_at(Point2d::new(4.0, 36.5)));
        assert!(!cs.is_valid_at(Point2d::new(3.9, 10.0)));
    }

    #[test]
    fn queries_are_pure() {
        let cs = disc_space(1, 1);
        let cell = Cell::new(20, 28);
        let first = (cs.is_valid(cell), cs.is_obstacle(cell));
        for _ in 0..10 {
            assert_eq!((cs.is_valid(cell), cs.is_obstacle(cell)), first);
        }
    }

    #[test]
    fn rasterized_obstacles() {
        let cs = disc_space(0, 0);
        let cells = cs.obstacle_cells().collect::<Vec<_>>();
        assert!(cells.contains(&Cell::new(20, 20)));
        assert!(cells.contains(&Cell::new(25, 20)));
        assert!(!cells.contains(&Cell::new(26, 20)));
        assert!(cells.iter().all(|cell| cs.is_obstacle(*cell)));
        assert!(cells.windows(2).all(|w| (w[0].row, w[0].col) < (w[1].row, w[1].col)));
    }
}
