//! Transpiler — renders a fork program as C-like pseudo-code.
//!
//! The output mirrors source order and nesting: it is what a student would
//! read in a textbook, not the process split the tree builder computes.

use super::ast::{Fork, Program, Stmt};

/// Rendering options for [`transpile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Spaces added per nesting level.
    pub indent: usize,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

/// Render `program` as pseudo-code lines.
pub fn transpile(program: &Program, options: TranspileOptions) -> Vec<String> {
    let mut out = Vec::new();
    render_block(&program.body, 0, options.indent, &mut out);
    out
}

/// Render `program` as a single newline-separated string.
pub fn transpile_to_string(program: &Program, options: TranspileOptions) -> String {
    transpile(program, options).join("\n")
}

fn render_block(stmts: &[Stmt], depth: usize, unit: usize, out: &mut Vec<String>) {
    let pad = " ".repeat(depth * unit);
    let line = |text: &str, out: &mut Vec<String>| out.push(format!("{pad}{text}"));

    for stmt in stmts {
        match stmt {
            Stmt::Print(c) => line(&format!("printf(\"{}\");", escape(*c)), out),
            Stmt::Exit => line("exit();", out),
            Stmt::Fork(Fork { parent, child, .. }) => {
                match (parent.is_empty(), child.is_empty()) {
                    (true, true) => line("fork();", out),
                    (false, child_empty) => {
                        line("if (fork()) {", out);
                        render_block(parent, depth + 1, unit, out);
                        if child_empty {
                            line("}", out);
                        } else {
                            line("} else {", out);
                            render_block(child, depth + 1, unit, out);
                            line("}", out);
                        }
                    }
                    (true, false) => {
                        line("if (fork() == 0) {", out);
                        render_block(child, depth + 1, unit, out);
                        line("}", out);
                    }
                }
            }
        }
    }
}

fn escape(c: char) -> String {
    match c {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::Dsl;

    fn render(src: &str) -> Vec<String> {
        let prog = Dsl::parse(src).unwrap();
        transpile(&prog, TranspileOptions { indent: 2 })
    }

    #[test]
    fn prints_one_statement_per_character() {
        assert_eq!(render("ab"), vec!["printf(\"a\");", "printf(\"b\");"]);
    }

    #[test]
    fn bare_fork() {
        assert_eq!(render("f(,)"), vec!["fork();"]);
    }

    #[test]
    fn parent_and_child_branches() {
        assert_eq!(
            render("af(b,c)"),
            vec![
                "printf(\"a\");",
                "if (fork()) {",
                "  printf(\"b\");",
                "} else {",
                "  printf(\"c\");",
                "}",
            ]
        );
    }

    #[test]
    fn child_only_branch() {
        assert_eq!(
            render("f(,c)"),
            vec!["if (fork() == 0) {", "  printf(\"c\");", "}"]
        );
    }

    #[test]
    fn parent_only_branch() {
        assert_eq!(render("f(b,)"), vec!["if (fork()) {", "  printf(\"b\");", "}"]);
    }

    #[test]
    fn nesting_increases_indent() {
        assert_eq!(
            render("f(f(,a),)x"),
            vec![
                "if (fork()) {",
                "  if (fork() == 0) {",
                "    printf(\"a\");",
                "  }",
                "}",
                "exit();",
            ]
        );
    }

    #[test]
    fn default_indent_is_four() {
        let prog = Dsl::parse("f(a,)").unwrap();
        let text = transpile_to_string(&prog, TranspileOptions::default());
        assert_eq!(text, "if (fork()) {\n    printf(\"a\");\n}");
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(render("\""), vec!["printf(\"\\\"\");"]);
    }
}
