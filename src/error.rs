//! Error types for planner construction and request validation.

use crate::Cell;
use thiserror::Error;

/// A malformed planning configuration, rejected before any search runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("robot radius must be non-negative, got {0}")]
    NegativeRadius(i32),

    #[error("clearance must be non-negative, got {0}")]
    NegativeClearance(i32),

    #[error("inflation margin {0} + {1} is too large")]
    MarginOverflow(i32, i32),

    #[error("step size must be at least 1, got {0}")]
    NonPositiveStep(i32),

    #[error("duplicate-suppression resolution must be positive and finite, got {0}")]
    InvalidResolution(f64),

    #[error("goal tolerance must be non-negative and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("action set has no actions")]
    EmptyActionSet,

    #[error("degenerate obstacle shape: {0}")]
    DegenerateShape(String),
}

/// A start or goal cell that cannot be planned from or to.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the start cell {0} is outside the map")]
    StartOutOfBounds(Cell),

    #[error("the goal cell {0} is outside the map")]
    GoalOutOfBounds(Cell),

    #[error("the start cell {0} is an obstacle")]
    StartInObstacle(Cell),

    #[error("the goal cell {0} is an obstacle")]
    GoalInObstacle(Cell),
}
