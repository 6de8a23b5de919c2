//! Planning requests and search settings.

use crate::error::ConfigError;
use crate::util::Interval;
use crate::Cell;

/// Robot radius range offered to interactive front ends, in cells.
pub const RADIUS_RANGE: Interval<i32> = Interval::new(0, 20);

/// Clearance range offered to interactive front ends, in cells.
pub const CLEARANCE_RANGE: Interval<i32> = Interval::new(0, 20);

/// Step size range offered to interactive front ends, in cells.
pub const STEP_RANGE: Interval<i32> = Interval::new(1, 10);

/// Default duplicate-suppression resolution, in cells.
pub const DEFAULT_RESOLUTION: f64 = 0.5;

/// Checks a robot's radius and clearance and returns the inflation margin
/// `radius + clearance`.
pub fn inflation_margin(radius: i32, clearance: i32) -> Result<i32, ConfigError> {
    if radius < 0 {
        return Err(ConfigError::NegativeRadius(radius));
    }
    if clearance < 0 {
        return Err(ConfigError::NegativeClearance(clearance));
    }
    radius
        .checked_add(clearance)
        .ok_or(ConfigError::MarginOverflow(radius, clearance))
}

/// Checks that an action step covers at least one cell.
pub fn check_step(step: i32) -> Result<i32, ConfigError> {
    if step < 1 {
        return Err(ConfigError::NonPositiveStep(step));
    }
    Ok(step)
}

/// One planning request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Configuration {
    /// The cell the robot starts in.
    pub start: Cell,
    /// The cell the robot should reach.
    pub goal: Cell,
    /// The robot's radius in cells.
    pub radius: i32,
    /// Extra safety clearance around obstacles and walls, in cells.
    pub clearance: i32,
    /// The distance travelled by each action, in cells.
    pub step_size: i32,
}

impl Configuration {
    /// Creates a planning request.
    pub fn new(start: Cell, goal: Cell, clearance: i32, radius: i32, step_size: i32) -> Self {
        Self {
            start,
            goal,
            radius,
            clearance,
            step_size,
        }
    }

    /// Checks the numeric constraints of the request.
    pub fn check(&self) -> Result<(), ConfigError> {
        inflation_margin(self.radius, self.clearance)?;
        check_step(self.step_size)?;
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            start: Cell::new(1, 1),
            goal: Cell::new(1, 1),
            radius: 5,
            clearance: 5,
            step_size: 1,
        }
    }
}

/// The family of actions the search may take from each state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionPolicy {
    /// The 8 grid-adjacent directions; diagonals cost `step * sqrt(2)`.
    #[default]
    Octile,
    /// `n` evenly spaced headings of length `step`, each snapped to the
    /// nearest whole-cell displacement.
    Headings(u32),
}

/// Tuning of the search beyond the planning request itself.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchSettings {
    /// The action set policy.
    pub actions: ActionPolicy,
    /// The bucket size used to merge nearly identical states, in cells.
    pub resolution: f64,
    /// If positive, the goal is reached within this distance of the goal
    /// cell's centre. If zero, the goal cell itself must be reached.
    pub goal_tolerance: f64,
}

impl SearchSettings {
    /// Checks the numeric constraints of the settings.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }
        if !(self.goal_tolerance.is_finite() && self.goal_tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(self.goal_tolerance));
        }
        if self.actions == ActionPolicy::Headings(0) {
            return Err(ConfigError::EmptyActionSet);
        }
        Ok(())
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            actions: ActionPolicy::Octile,
            resolution: DEFAULT_RESOLUTION,
            goal_tolerance: 0.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_in_range() {
        let config = Configuration::default();
        assert!(config.check().is_ok());
        assert!(RADIUS_RANGE.contains(config.radius));
        assert!(CLEARANCE_RANGE.contains(config.clearance));
        assert!(STEP_RANGE.contains(config.step_size));
        assert!(SearchSettings::default().check().is_ok());
    }

    #[test]
    fn rejects_malformed_requests() {
        let cell = Cell::new(5, 5);
        assert_eq!(
            Configuration::new(cell, cell, 0, -3, 1).check(),
            Err(ConfigError::NegativeRadius(-3))
        );
        assert_eq!(
            Configuration::new(cell, cell, -1, 0, 1).check(),
            Err(ConfigError::NegativeClearance(-1))
        );
        assert_eq!(
            Configuration::new(cell, cell, 0, 0, 0).check(),
            Err(ConfigError::NonPositiveStep(0))
        );
        assert_eq!(
            Configuration::new(cell, cell, 1, i32::MAX, 1).check(),
            Err(ConfigError::MarginOverflow(i32::MAX, 1))
        );
        assert_eq!(inflation_margin(20, 20), Ok(40));
        assert_eq!(inflation_margin(i32::MAX, 0), Ok(i32::MAX));
    }

    #[test]
    fn rejects_malformed_settings() {
        let bad_resolution = SearchSettings {
            resolution: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_resolution.check(),
            Err(ConfigError::InvalidResolution(_))
        ));

        let bad_tolerance = SearchSettings {
            goal_tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            bad_tolerance.check(),
            Err(ConfigError::InvalidTolerance(_))
        ));

        let no_actions = SearchSettings {
            actions: ActionPolicy::Headings(0),
            ..Default::default()
        };
        assert_eq!(no_actions.check(), Err(ConfigError::EmptyActionSet));
    }
}
