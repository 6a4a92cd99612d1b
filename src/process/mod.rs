//! Process-execution tree — one node per contiguous output segment of a process.
//!
//! A segment ends when its process forks. The same process then carries on in
//! the `continuation` node (same id, next step) while the new child starts in
//! the `spawned` node (fresh id, step 0).

pub mod builder;
pub mod render;

pub use builder::{build_tree, TreeBuilder, MAX_FORKS_PER_PROCESS, MAX_TREE_NODES};
pub use render::render_tree;

use std::fmt;

use serde::Serialize;

use crate::dsl::EXIT_MARKER;

/// Path-shaped process identifier.
///
/// The root is `0`; the n-th fork of process `p` creates `p * 10 + n`, so the
/// decimal digits spell out the lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProcessId(pub u64);

impl ProcessId {
    pub const ROOT: ProcessId = ProcessId(0);

    /// Id of the child created by this process's `nth` fork (1-based).
    /// `None` on overflow.
    pub fn child(self, nth: u32) -> Option<ProcessId> {
        self.0
            .checked_mul(10)
            .and_then(|id| id.checked_add(u64::from(nth)))
            .map(ProcessId)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happens after a segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    /// The process ends here, either by running out of code or by exiting.
    End,
    /// The process forked.
    Fork {
        /// Same process, next step.
        continuation: Box<ProcessNode>,
        /// First segment of the new child.
        spawned: Box<ProcessNode>,
    },
}

/// One segment of one process.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessNode {
    pub pid: ProcessId,
    pub step: u32,
    /// Characters printed during this segment, possibly ending in the exit marker.
    pub text: String,
    pub next: Next,
}

impl ProcessNode {
    pub fn leaf(pid: ProcessId, step: u32, text: impl Into<String>) -> Self {
        Self {
            pid,
            step,
            text: text.into(),
            next: Next::End,
        }
    }

    pub fn continuation(&self) -> Option<&ProcessNode> {
        match &self.next {
            Next::Fork { continuation, .. } => Some(&**continuation),
            Next::End => None,
        }
    }

    pub fn spawned(&self) -> Option<&ProcessNode> {
        match &self.next {
            Next::Fork { spawned, .. } => Some(&**spawned),
            Next::End => None,
        }
    }

    pub fn forks(&self) -> bool {
        matches!(self.next, Next::Fork { .. })
    }

    /// Whether this segment ends by executing the exit marker.
    pub fn exited(&self) -> bool {
        self.text.ends_with(EXIT_MARKER)
    }

    /// Printed characters of this segment, exit marker excluded.
    pub fn prints(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars().filter(|&c| c != EXIT_MARKER)
    }

    /// Pre-order traversal: self, then the continuation subtree, then the
    /// spawned subtree.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Pre-order iterator over a process tree.
pub struct Iter<'a> {
    stack: Vec<&'a ProcessNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ProcessNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Next::Fork {
            continuation,
            spawned,
        } = &node.next
        {
            self.stack.push(spawned);
            self.stack.push(continuation);
        }
        Some(node)
    }
}
