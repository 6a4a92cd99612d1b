//! Process hierarchy — parent/child edges and per-process print labels.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::process::{ProcessId, ProcessNode};

/// One process-creation edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub child: ProcessId,
    pub parent: ProcessId,
}

/// The process-creation graph of a tree, plus what each process prints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hierarchy {
    /// Deduplicated, in discovery order.
    pub edges: Vec<Edge>,
    /// Text of every segment of a process, in step order.
    pub labels: BTreeMap<ProcessId, Vec<String>>,
}

impl Hierarchy {
    pub fn from_tree(root: &ProcessNode) -> Self {
        let mut hierarchy = Self::default();
        let mut seen = BTreeSet::new();
        hierarchy.visit(root, root.pid, &mut seen);
        hierarchy
    }

    fn visit(&mut self, node: &ProcessNode, entered_from: ProcessId, seen: &mut BTreeSet<Edge>) {
        if node.pid != entered_from {
            let edge = Edge {
                child: node.pid,
                parent: entered_from,
            };
            if seen.insert(edge) {
                self.edges.push(edge);
            }
        }
        self.labels
            .entry(node.pid)
            .or_default()
            .push(node.text.clone());

        if let Some(next) = node.continuation() {
            self.visit(next, node.pid, seen);
        }
        if let Some(child) = node.spawned() {
            self.visit(child, node.pid, seen);
        }
    }

    /// Number of distinct processes.
    pub fn process_count(&self) -> usize {
        self.labels.len()
    }

    /// `child,parent` header followed by one row per edge.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("child,parent");
        for edge in &self.edges {
            csv.push('\n');
            csv.push_str(&format!("{},{}", edge.child, edge.parent));
        }
        csv
    }

    /// One `id: [fragment,fragment]` line per process.
    pub fn label_lines(&self) -> Vec<String> {
        self.labels
            .iter()
            .map(|(pid, fragments)| format!("{pid}: [{}]", fragments.join(",")))
            .collect()
    }
}
