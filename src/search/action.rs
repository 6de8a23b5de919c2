use crate::config::{check_step, ActionPolicy};
use crate::error::ConfigError;
use crate::math::Vector2d;
use cgmath::prelude::*;
use itertools::Itertools;
use std::f64::consts::TAU;

/// Two displacements closer than this are considered the same action.
const MATCH_EPS: f64 = 1e-6;

/// A single motion primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Action {
    /// The displacement, with `x` along the columns and `y` along the rows.
    pub offset: Vector2d,
    /// The cost of taking the action; always the Euclidean length of `offset`.
    pub cost: f64,
}

impl Action {
    /// An action moving `dx` columns and `dy` rows.
    fn new(dx: i32, dy: i32) -> Self {
        let offset = Vector2d::new(dx as f64, dy as f64);
        Self {
            offset,
            cost: offset.magnitude(),
        }
    }
}

/// The set of actions available from every state.
///
/// Every action moves a whole number of rows and columns, so states stay on
/// cell centres. Action costs equal the distance travelled, which keeps the
/// straight-line heuristic admissible and consistent for any set.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionSet {
    actions: Vec<Action>,
}

impl ActionSet {
    /// The 8 grid-adjacent directions, scaled by `step`.
    pub fn octile(step: i32) -> Self {
        let actions = [
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
        ]
        .into_iter()
        .map(|(dx, dy)| Action::new(dx * step, dy * step))
        .collect();
        Self { actions }
    }

    /// `count` evenly spaced headings of length `step`, starting along the
    /// positive x axis.
    ///
    /// Each heading is snapped to the nearest whole-cell displacement and
    /// costs the length of that displacement. Headings that snap to the same
    /// displacement are merged, so small steps yield fewer than `count` actions.
    pub fn headings(count: u32, step: i32) -> Result<Self, ConfigError> {
        let length = step as f64;
        let actions = (0..count)
            .map(|i| {
                let theta = TAU * i as f64 / count as f64;
                let dx = (length * theta.cos()).round() as i32;
                let dy = (length * theta.sin()).round() as i32;
                (dx, dy)
            })
            .filter(|&offset| offset != (0, 0))
            .unique()
            .map(|(dx, dy)| Action::new(dx, dy))
            .collect::<Vec<_>>();
        if actions.is_empty() {
            return Err(ConfigError::EmptyActionSet);
        }
        Ok(Self { actions })
    }

    /// Builds the action set described by a policy.
    pub fn from_policy(policy: ActionPolicy, step: i32) -> Result<Self, ConfigError> {
        let step = check_step(step)?;
        match policy {
            ActionPolicy::Octile => Ok(Self::octile(step)),
            ActionPolicy::Headings(count) => Self::headings(count, step),
        }
    }

    /// Iterates over the actions.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// The number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if the set has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Finds the action producing the given displacement, if there is one.
    pub fn find(&self, offset: Vector2d) -> Option<&Action> {
        self.actions
            .iter()
            .find(|a| (a.offset - offset).magnitude2() < MATCH_EPS * MATCH_EPS)
    }
}

#[cfg(test)]
mod test {
    use super::ActionSet;
    use crate::config::ActionPolicy;
    use crate::error::ConfigError;
    use crate::math::Vector2d;
    use assert_approx_eq::assert_approx_eq;
    use cgmath::prelude::*;

    #[test]
    fn octile_costs() {
        let actions = ActionSet::octile(3);
        assert_eq!(actions.len(), 8);
        assert_approx_eq!(actions.find(Vector2d::new(3.0, 0.0)).unwrap().cost, 3.0);
        assert_approx_eq!(
            actions.find(Vector2d::new(-3.0, 3.0)).unwrap().cost,
            3.0 * std::f64::consts::SQRT_2
        );
        assert!(actions.find(Vector2d::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn headings_snap_to_cells() {
        // Sixteen unit headings collapse onto the eight neighbours.
        assert_eq!(ActionSet::headings(16, 1).unwrap(), ActionSet::octile(1));

        let actions = ActionSet::headings(12, 2).unwrap();
        assert_eq!(actions.len(), 12);
        for action in actions.iter() {
            assert_eq!(action.offset.x.fract(), 0.0);
            assert_eq!(action.offset.y.fract(), 0.0);
            assert_approx_eq!(action.cost, action.offset.magnitude());
        }
        assert_approx_eq!(actions.find(Vector2d::new(0.0, 2.0)).unwrap().cost, 2.0);
        assert_approx_eq!(actions.find(Vector2d::new(2.0, 1.0)).unwrap().cost, 5f64.sqrt());
        assert!(actions.find(Vector2d::new(2.0, 2.0)).is_none());
    }

    #[test]
    fn policy_validation() {
        assert_eq!(
            ActionSet::from_policy(ActionPolicy::Octile, 0),
            Err(ConfigError::NonPositiveStep(0))
        );
        assert_eq!(
            ActionSet::from_policy(ActionPolicy::Headings(0), 1),
            Err(ConfigError::EmptyActionSet)
        );
    }
}
