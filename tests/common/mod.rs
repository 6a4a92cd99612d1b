//! Test helper: runs transpiled pseudo-code with real fork() semantics.
//!
//! Each fork runs the parent path to completion, then the child path, on a
//! single thread. Only the pseudo-code text is used, so the result is
//! independent of the process-tree builder.

#![allow(dead_code)]

use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum C {
    Print(char),
    Exit,
    Fork,
    IfParent(Vec<C>, Vec<C>),
    IfChild(Vec<C>),
}

/// What one execution of a program did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Execution {
    pub prints: BTreeMap<char, usize>,
    pub forks: usize,
}

impl Execution {
    pub fn total_prints(&self) -> usize {
        self.prints.values().sum()
    }
}

pub fn execute(pseudo_code: &[String]) -> Execution {
    let lines: Vec<&str> = pseudo_code.iter().map(|l| l.trim()).collect();
    let mut pos = 0;
    let program = parse_block(&lines, &mut pos);
    assert_eq!(pos, lines.len(), "unparsed pseudo-code at line {pos}");

    let mut exec = Execution::default();
    let code: Vec<&C> = program.iter().collect();
    run(&code, &mut exec);
    exec
}

fn parse_block(lines: &[&str], pos: &mut usize) -> Vec<C> {
    let mut block = Vec::new();
    while let Some(&line) = lines.get(*pos) {
        if line == "}" || line == "} else {" {
            break;
        }
        *pos += 1;
        let stmt = match line {
            "exit();" => C::Exit,
            "fork();" => C::Fork,
            "if (fork()) {" => {
                let parent = parse_block(lines, pos);
                let child = if lines[*pos] == "} else {" {
                    *pos += 1;
                    parse_block(lines, pos)
                } else {
                    Vec::new()
                };
                assert_eq!(lines[*pos], "}");
                *pos += 1;
                C::IfParent(parent, child)
            }
            "if (fork() == 0) {" => {
                let child = parse_block(lines, pos);
                assert_eq!(lines[*pos], "}");
                *pos += 1;
                C::IfChild(child)
            }
            printf => {
                let inner = printf
                    .strip_prefix("printf(\"")
                    .and_then(|s| s.strip_suffix("\");"))
                    .unwrap_or_else(|| panic!("unexpected line: {printf}"));
                let c = inner.chars().last().expect("empty printf");
                C::Print(c)
            }
        };
        block.push(stmt);
    }
    block
}

fn run(code: &[&C], exec: &mut Execution) {
    for (i, stmt) in code.iter().enumerate() {
        let rest = &code[i + 1..];
        let (parent, child): (&[C], &[C]) = match stmt {
            C::Print(c) => {
                *exec.prints.entry(*c).or_insert(0) += 1;
                continue;
            }
            C::Exit => return,
            C::Fork => (&[][..], &[][..]),
            C::IfParent(p, c) => (p.as_slice(), c.as_slice()),
            C::IfChild(c) => (&[][..], c.as_slice()),
        };
        exec.forks += 1;
        let parent_path: Vec<&C> = parent.iter().chain(rest.iter().copied()).collect();
        let child_path: Vec<&C> = child.iter().chain(rest.iter().copied()).collect();
        run(&parent_path, exec);
        run(&child_path, exec);
        return;
    }
}
