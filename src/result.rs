//! The output of a search and its playback.

use crate::Cell;

/// Counters collected during a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped and expanded.
    pub expanded: usize,
    /// Successors that passed the validity and obstacle checks.
    pub generated: usize,
    /// Successors outside the workspace or inside an obstacle.
    pub rejected: usize,
    /// Successors dropped because their bucket already had an equal or cheaper cost.
    pub duplicates: usize,
    /// The largest frontier size reached.
    pub peak_frontier: usize,
}

/// The outcome of one search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in the order they were expanded.
    pub explored: Vec<Cell>,
    /// The optimal path from start to goal; empty if the goal is unreachable.
    pub path: Vec<Cell>,
    /// The cost of `path`, or infinity if the goal is unreachable.
    pub cost: f64,
    /// Search counters.
    pub stats: SearchStats,
}

impl SearchResult {
    pub(crate) fn unreachable(explored: Vec<Cell>, stats: SearchStats) -> Self {
        Self {
            explored,
            path: vec![],
            cost: f64::INFINITY,
            stats,
        }
    }

    /// Returns true if a path to the goal was found.
    pub fn is_found(&self) -> bool {
        self.cost.is_finite()
    }

    /// Splits the result into at most `frames` batches of explored cells,
    /// followed by the path as a final frame when one was found.
    pub fn playback(&self, frames: usize) -> Playback<'_> {
        let batch = usize::max(1, self.explored.len() / frames.max(1));
        Playback {
            explored: self.explored.chunks(batch),
            path: Some(self.path.as_slice()).filter(|path| !path.is_empty()),
        }
    }
}

/// One step of a playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame<'a> {
    /// A batch of newly explored cells.
    Explored(&'a [Cell]),
    /// The final path.
    Path(&'a [Cell]),
}

/// Replays a [`SearchResult`] frame by frame.
///
/// The consumer decides how long to wait between frames.
#[derive(Clone, Debug)]
pub struct Playback<'a> {
    explored: std::slice::Chunks<'a, Cell>,
    path: Option<&'a [Cell]>,
}

impl<'a> Iterator for Playback<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.explored.next() {
            Some(batch) => Some(Frame::Explored(batch)),
            None => self.path.take().map(Frame::Path),
        }
    }
}
