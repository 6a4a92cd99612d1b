//! Tree statistics used to judge question difficulty.

use serde::Serialize;

use crate::process::ProcessNode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Segments in the tree.
    pub segments: usize,
    /// Distinct processes; always `forks + 1`.
    pub processes: usize,
    /// Forks actually executed.
    pub forks: usize,
    /// Processes that ended on the exit marker.
    pub exits: usize,
    /// Characters printed in total.
    pub prints: usize,
    /// Longest chain of steps from the root, measured along continuations.
    /// A spawned child starts on its parent's step.
    pub timeline_len: usize,
}

impl TreeStats {
    pub fn from_tree(root: &ProcessNode) -> Self {
        let mut stats = Self {
            timeline_len: timeline_len(root),
            ..Self::default()
        };
        for node in root.iter() {
            stats.segments += 1;
            if node.forks() {
                stats.forks += 1;
            }
            if node.exited() {
                stats.exits += 1;
            }
            if node.step == 0 {
                stats.processes += 1;
            }
            stats.prints += node.prints().count();
        }
        stats
    }
}

fn timeline_len(node: &ProcessNode) -> usize {
    let along = node.continuation().map_or(0, |n| timeline_len(n) + 1);
    let below = node.spawned().map_or(0, timeline_len);
    along.max(below)
}

/// Everything the tree prints, parent path before child, in one string.
pub fn output(root: &ProcessNode) -> String {
    root.iter().flat_map(|node| node.prints()).collect()
}
