//! Tree builder — walks a [`Program`] the way the processes would run it.
//!
//! Code following a fork is shared: it is appended to both the parent's
//! argument and the child's argument before each is built.

use crate::dsl::{DslError, Program, Stmt, EXIT_MARKER};

use super::{Next, ProcessId, ProcessNode};

/// Forks a single process may perform. Beyond this, child ids collide.
pub const MAX_FORKS_PER_PROCESS: u32 = 10;

/// Upper bound on segments in one tree; sequential forks double it each time.
pub const MAX_TREE_NODES: usize = 1 << 16;

/// Build the process-execution tree for `program`.
pub fn build_tree(program: &Program) -> Result<ProcessNode, DslError> {
    TreeBuilder::new().build(program)
}

pub struct TreeBuilder {
    nodes: usize,
    max_nodes: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            max_nodes: MAX_TREE_NODES,
        }
    }

    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            nodes: 0,
            max_nodes,
        }
    }

    pub fn build(mut self, program: &Program) -> Result<ProcessNode, DslError> {
        let code: Vec<&Stmt> = program.body.iter().collect();
        let root = self.segment(&code, ProcessId::ROOT, 0, 0)?;
        log::debug!("built process tree with {} segments", self.nodes);
        Ok(root)
    }

    /// Build one segment. `origin` is the offset of the fork that created it,
    /// reported if the segment would exceed the node budget.
    fn segment<'a>(
        &mut self,
        code: &[&'a Stmt],
        pid: ProcessId,
        step: u32,
        origin: usize,
    ) -> Result<ProcessNode, DslError> {
        if self.nodes >= self.max_nodes {
            return Err(DslError::limit(
                format!("process tree exceeds {} segments", self.max_nodes),
                origin,
            ));
        }
        self.nodes += 1;
        let mut text = String::new();

        for (i, &stmt) in code.iter().enumerate() {
            match stmt {
                Stmt::Print(c) => text.push(*c),
                Stmt::Exit => {
                    // Everything after an exit is unreachable for this process,
                    // forks included.
                    text.push(EXIT_MARKER);
                    return Ok(ProcessNode::leaf(pid, step, text));
                }
                Stmt::Fork(fork) => {
                    let nth = step + 1;
                    if nth > MAX_FORKS_PER_PROCESS {
                        return Err(DslError::limit(
                            format!(
                                "process {pid} forks more than {MAX_FORKS_PER_PROCESS} times"
                            ),
                            fork.offset,
                        ));
                    }
                    let child = pid.child(nth).ok_or_else(|| {
                        DslError::limit(format!("process id overflow below {pid}"), fork.offset)
                    })?;

                    let rest = &code[i + 1..];
                    let parent_code: Vec<&Stmt> =
                        fork.parent.iter().chain(rest.iter().copied()).collect();
                    let child_code: Vec<&Stmt> =
                        fork.child.iter().chain(rest.iter().copied()).collect();

                    let continuation = self.segment(&parent_code, pid, step + 1, fork.offset)?;
                    let spawned = self.segment(&child_code, child, 0, fork.offset)?;

                    return Ok(ProcessNode {
                        pid,
                        step,
                        text,
                        next: Next::Fork {
                            continuation: Box::new(continuation),
                            spawned: Box::new(spawned),
                        },
                    });
                }
            }
        }

        Ok(ProcessNode::leaf(pid, step, text))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
