//! Abstract Syntax Tree for the fork DSL.
//!
//! The parser produces one [`Program`]; the process-tree builder and the
//! transpiler both walk it.

/// A complete fork program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// One statement of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Print(char),
    Exit,
    Fork(Fork),
}

/// A fork construct `f(parent,child)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fork {
    /// Code run only by the calling process, before the shared suffix.
    pub parent: Vec<Stmt>,
    /// Code run only by the new child, before the shared suffix.
    pub child: Vec<Stmt>,
    /// Character offset of the `f(` token.
    pub offset: usize,
}

impl Program {
    /// Number of fork constructs anywhere in the source.
    pub fn fork_count(&self) -> usize {
        count(&self.body, &|s| matches!(s, Stmt::Fork(_)))
    }

    /// Number of print statements anywhere in the source.
    pub fn print_count(&self) -> usize {
        count(&self.body, &|s| matches!(s, Stmt::Print(_)))
    }

    pub fn has_exit(&self) -> bool {
        count(&self.body, &|s| matches!(s, Stmt::Exit)) > 0
    }

    /// Print characters in source order.
    pub fn print_chars(&self) -> Vec<char> {
        let mut out = Vec::new();
        collect_prints(&self.body, &mut out);
        out
    }
}

fn count(stmts: &[Stmt], pred: &dyn Fn(&Stmt) -> bool) -> usize {
    stmts
        .iter()
        .map(|s| {
            let nested = match s {
                Stmt::Fork(f) => count(&f.parent, pred) + count(&f.child, pred),
                _ => 0,
            };
            usize::from(pred(s)) + nested
        })
        .sum()
}

fn collect_prints(stmts: &[Stmt], out: &mut Vec<char>) {
    for s in stmts {
        match s {
            Stmt::Print(c) => out.push(*c),
            Stmt::Exit => {}
            Stmt::Fork(f) => {
                collect_prints(&f.parent, out);
                collect_prints(&f.child, out);
            }
        }
    }
}
