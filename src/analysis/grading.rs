//! Grading key — how many times each character prints, across all processes.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::process::ProcessNode;

/// Mapping from printed character to its total occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GradingKey {
    counts: BTreeMap<char, usize>,
}

impl GradingKey {
    /// Tally every printed character in the tree. Each segment belongs to one
    /// process, so every print is counted exactly once.
    pub fn from_tree(root: &ProcessNode) -> Self {
        Self::with_expected(root, std::iter::empty())
    }

    /// Like [`GradingKey::from_tree`], but every character in `expected` gets
    /// an entry even if it never prints (e.g. it sits behind an exit).
    pub fn with_expected(root: &ProcessNode, expected: impl IntoIterator<Item = char>) -> Self {
        let mut counts: BTreeMap<char, usize> = expected.into_iter().map(|c| (c, 0)).collect();
        for c in root.iter().flat_map(|node| node.prints()) {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `c`; characters that never appear count zero.
    pub fn get(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Total number of prints across the tree.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    pub fn as_map(&self) -> &BTreeMap<char, usize> {
        &self.counts
    }

    /// Compare learner answers against the key, one verdict per key entry.
    pub fn grade(&self, answers: &BTreeMap<char, Option<usize>>) -> Grade {
        let verdicts = self
            .iter()
            .map(|(c, expected)| {
                let verdict = match answers.get(&c).copied().flatten() {
                    None => Verdict::Missing,
                    Some(given) if given == expected => Verdict::Correct,
                    Some(given) => Verdict::Incorrect { expected, given },
                };
                (c, verdict)
            })
            .collect();
        Grade { verdicts }
    }
}

/// Outcome for a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Correct,
    Incorrect { expected: usize, given: usize },
    Missing,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "correct"),
            Verdict::Incorrect { given, .. } => write!(f, "incorrect ({given})"),
            Verdict::Missing => write!(f, "no answer"),
        }
    }
}

/// Per-character verdicts for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub verdicts: Vec<(char, Verdict)>,
}

impl Grade {
    pub fn is_correct(&self) -> bool {
        self.verdicts.iter().all(|(_, v)| *v == Verdict::Correct)
    }

    /// Characters that were answered wrongly or not at all.
    pub fn mistakes(&self) -> impl Iterator<Item = &(char, Verdict)> {
        self.verdicts.iter().filter(|(_, v)| *v != Verdict::Correct)
    }
}
