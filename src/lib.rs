//! Path planning for a disc-shaped robot in a static 2D workspace.
//!
//! A [`ConfigSpace`] inflates the obstacles of an [`ObstacleSet`] by the
//! robot's radius and clearance, and a [`Planner`] runs an A* search over it,
//! producing the order in which cells were explored and the optimal path.

pub use cell::Cell;
pub use cgmath;
pub use config::{ActionPolicy, Configuration, SearchSettings};
pub use cspace::ConfigSpace;
pub use error::{ConfigError, ValidationError};
pub use obstacle::{ConvexPolygon, ObstacleSet, Shape};
pub use result::{Frame, Playback, SearchResult, SearchStats};
pub use search::{quantize, Action, ActionSet, BucketKey, Planner};
use slotmap::new_key_type;
pub use util::Interval;
pub use workspace::Workspace;

mod cell;
pub mod config;
mod cspace;
mod error;
pub mod math;
mod obstacle;
mod result;
mod search;
mod util;
mod workspace;

new_key_type! {
    /// Index of a node in the search arena.
    pub(crate) struct NodeId;
}
