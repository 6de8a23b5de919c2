//! A* search over the configuration space.

use self::frontier::Frontier;
use self::node::SearchNode;
use crate::config::{Configuration, SearchSettings};
use crate::cspace::ConfigSpace;
use crate::error::{ConfigError, ValidationError};
use crate::math::Point2d;
use crate::result::{SearchResult, SearchStats};
use crate::{Cell, NodeId, ObstacleSet, Workspace};
use cgmath::prelude::*;
use log::{debug, trace, warn};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;
use std::sync::Arc;

pub use action::{Action, ActionSet};
pub use node::{quantize, BucketKey};

mod action;
mod frontier;
mod node;

/// Plans paths for one configuration of start, goal and robot geometry.
///
/// Each call to [`search`](Self::search) starts from scratch; no state is
/// kept between calls.
#[derive(Clone, Debug)]
pub struct Planner {
    /// The inflated configuration space.
    cspace: ConfigSpace,
    /// The start cell.
    start: Cell,
    /// The goal cell.
    goal: Cell,
    /// The motion primitives.
    actions: ActionSet,
    /// The duplicate-suppression bucket size, in cells.
    resolution: f64,
    /// The goal tolerance, in cells; zero requires reaching the goal cell itself.
    goal_tolerance: f64,
}

impl Planner {
    /// Creates a planner for the default arena.
    ///
    /// # Parameters
    /// * `start` - The cell the robot starts in.
    /// * `goal` - The cell the robot should reach.
    /// * `clearance` - Extra safety margin around obstacles, in cells.
    /// * `radius` - The robot's radius, in cells.
    /// * `step_size` - The distance covered by each action, in cells.
    pub fn configure(
        start: Cell,
        goal: Cell,
        clearance: i32,
        radius: i32,
        step_size: i32,
    ) -> Result<Self, ConfigError> {
        Self::new(
            Workspace::default(),
            ObstacleSet::arena()?,
            &Configuration::new(start, goal, clearance, radius, step_size),
        )
    }

    /// Creates a planner with the default search settings.
    pub fn new(
        workspace: Workspace,
        obstacles: impl Into<Arc<ObstacleSet>>,
        config: &Configuration,
    ) -> Result<Self, ConfigError> {
        Self::with_settings(workspace, obstacles, config, &SearchSettings::default())
    }

    /// Creates a planner.
    ///
    /// The request is checked by the configuration space (radius and
    /// clearance) and the action set (step size).
    pub fn with_settings(
        workspace: Workspace,
        obstacles: impl Into<Arc<ObstacleSet>>,
        config: &Configuration,
        settings: &SearchSettings,
    ) -> Result<Self, ConfigError> {
        settings.check()?;
        Ok(Self {
            cspace: ConfigSpace::new(workspace, obstacles, config.radius, config.clearance)?,
            start: config.start,
            goal: config.goal,
            actions: ActionSet::from_policy(settings.actions, config.step_size)?,
            resolution: settings.resolution,
            goal_tolerance: settings.goal_tolerance,
        })
    }

    /// The configuration space searched by this planner.
    pub fn cspace(&self) -> &ConfigSpace {
        &self.cspace
    }

    /// The motion primitives.
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// The start cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The goal cell.
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Returns true if the robot fits inside the workspace at the cell.
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.cspace.is_valid(cell)
    }

    /// Returns true if the cell lies inside an inflated obstacle.
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.cspace.is_obstacle(cell)
    }

    /// Checks that the start and goal cells can be occupied by the robot.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_valid(self.start) {
            return Err(ValidationError::StartOutOfBounds(self.start));
        }
        if !self.is_valid(self.goal) {
            return Err(ValidationError::GoalOutOfBounds(self.goal));
        }
        if self.is_obstacle(self.start) {
            return Err(ValidationError::StartInObstacle(self.start));
        }
        if self.is_obstacle(self.goal) {
            return Err(ValidationError::GoalInObstacle(self.goal));
        }
        Ok(())
    }

    /// Straight-line estimate of the cost remaining from `point`.
    pub fn heuristic(&self, point: Point2d) -> f64 {
        f64::max(0.0, point.distance(self.goal.centre()) - self.goal_tolerance)
    }

    /// Returns true if a state at `point` satisfies the goal condition.
    ///
    /// With a zero tolerance the state must lie in the goal cell; otherwise it
    /// must lie within `goal_tolerance` of the goal cell's centre.
    pub fn is_goal(&self, point: Point2d) -> bool {
        if self.goal_tolerance > 0.0 {
            point.distance(self.goal.centre()) <= self.goal_tolerance
        } else {
            Cell::nearest(point) == self.goal
        }
    }

    /// Runs the search to completion.
    ///
    /// Returns the cells in expansion order, the optimal path and its cost.
    /// If the goal cannot be reached, the path is empty and the cost infinite.
    pub fn search(&self) -> SearchResult {
        let mut stats = SearchStats::default();
        let mut explored = vec![];

        if let Err(err) = self.validate() {
            warn!("Search not started: {}", err);
            return SearchResult::unreachable(explored, stats);
        }

        debug!(
            "Searching {} -> {} (margin {}, {} actions)",
            self.start,
            self.goal,
            self.cspace.margin(),
            self.actions.len()
        );

        let mut nodes = SlotMap::<NodeId, SearchNode>::with_key();
        let mut index = FxHashMap::<BucketKey, NodeId>::default();
        let mut frontier = Frontier::new();

        let origin = self.start.centre();
        let root = nodes.insert(SearchNode::new(origin, 0.0, self.heuristic(origin), None));
        index.insert(quantize(origin, self.resolution), root);
        frontier.push(root, nodes[root].f());

        while let Some(id) = frontier.pop() {
            let node = &mut nodes[id];
            if node.finalized {
                continue;
            }
            node.finalized = true;
            let (pos, g) = (node.pos, node.g);
            explored.push(node.cell());
            stats.expanded += 1;
            trace!("Expanding {} (g = {:.3}, f = {:.3})", node.cell(), g, node.f());

            if self.is_goal(pos) {
                stats.peak_frontier = frontier.peak();
                let path = reconstruct_path(&nodes, id);
                debug!(
                    "Goal reached: cost {:.3}, {} path cells, {} expanded",
                    g,
                    path.len(),
                    stats.expanded
                );
                return SearchResult {
                    explored,
                    path,
                    cost: g,
                    stats,
                };
            }

            let successors = self
                .actions
                .iter()
                .map(|action| (pos + action.offset, g + action.cost))
                .collect::<SmallVec<[_; 16]>>();

            for (next, tentative) in successors {
                if !self.cspace.is_free_at(next) {
                    stats.rejected += 1;
                    continue;
                }
                stats.generated += 1;

                let key = quantize(next, self.resolution);
                match index.get(&key).copied() {
                    Some(existing) => {
                        let other = &mut nodes[existing];
                        if other.finalized || other.g <= tentative {
                            stats.duplicates += 1;
                            continue;
                        }
                        other.pos = next;
                        other.g = tentative;
                        other.h = self.heuristic(next);
                        other.parent = Some(id);
                        frontier.push(existing, other.f());
                    }
                    None => {
                        let h = self.heuristic(next);
                        let new_id = nodes.insert(SearchNode::new(next, tentative, h, Some(id)));
                        index.insert(key, new_id);
                        frontier.push(new_id, tentative + h);
                    }
                }
            }
        }

        stats.peak_frontier = frontier.peak();
        debug!(
            "Frontier exhausted without reaching {}: {} expanded",
            self.goal, stats.expanded
        );
        SearchResult::unreachable(explored, stats)
    }
}

/// Walks parent links back from `goal` and returns the cells from the start.
fn reconstruct_path(nodes: &SlotMap<NodeId, SearchNode>, goal: NodeId) -> Vec<Cell> {
    let mut path = std::iter::successors(Some(goal), |id| nodes[*id].parent)
        .map(|id| nodes[id].cell())
        .collect::<Vec<_>>();
    path.reverse();
    path
}
