//! Tree analysis — grading key, process hierarchy, answer checking, statistics.
//!
//! All traversals are read-only; the tree is never modified.

pub mod grading;
pub mod hierarchy;
pub mod stats;

pub use grading::{Grade, GradingKey, Verdict};
pub use hierarchy::{Edge, Hierarchy};
pub use stats::{output, TreeStats};
