use crate::NodeId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry with reverse ordering for a min-heap.
#[derive(Clone, Copy, Debug)]
struct Entry {
    f: f64,
    /// Insertion counter; earlier entries win ties on `f`.
    seq: u64,
    node: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Discovered nodes waiting to be expanded, lowest `f` first and
/// first-in first-out among equal `f`.
///
/// A node re-inserted with a lower `f` leaves its old entry behind; the
/// caller skips entries for nodes that were already expanded.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
    peak: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, node: NodeId, f: f64) {
        self.heap.push(Entry {
            f,
            seq: self.seq,
            node,
        });
        self.seq += 1;
        self.peak = self.peak.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    /// The largest number of entries held at once.
    pub fn peak(&self) -> usize {
        self.peak
    }
}
