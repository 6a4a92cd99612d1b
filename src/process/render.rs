//! Text rendering of a process tree.
//!
//! Continuations run to the right along a `─` rule, spawned children hang
//! below their parent. Each segment shows as `pid.step:text`, with `\` for a
//! segment that prints nothing.

use super::ProcessNode;

const RULE: &str = "─";
const EMPTY: &str = "\\";

/// Render the tree as newline-separated lines.
pub fn render_tree(root: &ProcessNode) -> String {
    lines(root).join("\n")
}

fn label(node: &ProcessNode) -> String {
    let text = if node.text.is_empty() {
        EMPTY
    } else {
        node.text.as_str()
    };
    format!("{}.{}:{}", node.pid, node.step, text)
}

fn width(line: &str) -> usize {
    line.chars().count()
}

fn lines(node: &ProcessNode) -> Vec<String> {
    let label = label(node);
    let right = node.continuation().map(lines).unwrap_or_default();
    let below = node.spawned().map(lines).unwrap_or_default();

    let below_width = below.iter().map(|l| width(l)).max().unwrap_or(0);
    let span = width(&label).max(below_width);

    let mut out = Vec::with_capacity(right.len() + below.len() + 1);
    match right.split_first() {
        Some((first, rest)) => {
            let rule = RULE.repeat(span - width(&label) + 1);
            out.push(format!("{label}{rule}{first}"));
            let bar = if below.is_empty() { ' ' } else { '|' };
            let gutter = format!("{bar}{}", " ".repeat(span));
            out.extend(rest.iter().map(|l| format!("{gutter}{l}")));
        }
        None => out.push(label),
    }
    out.extend(below);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::Dsl;
    use crate::process::build_tree;

    fn render(src: &str) -> String {
        render_tree(&build_tree(&Dsl::parse(src).unwrap()).unwrap())
    }

    #[test]
    fn single_segment() {
        assert_eq!(render("ab"), "0.0:ab");
    }

    #[test]
    fn empty_segment_uses_placeholder() {
        assert_eq!(render(""), "0.0:\\");
    }

    #[test]
    fn continuation_right_child_below() {
        assert_eq!(render("af(b,c)"), "0.0:a─0.1:b\n1.0:c");
    }

    #[test]
    fn wide_child_pushes_continuation_right() {
        let out = render("f(,)f(,)");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "0.0:\\───────0.1:\\─0.2:\\");
        assert_eq!(lines[1], "|           2.0:\\");
        assert_eq!(lines[2], "1.0:\\─1.1:\\");
        assert_eq!(lines[3], "11.0:\\");
    }
}
