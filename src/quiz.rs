//! Questions — one source program plus everything derived from it.
//!
//! Source → parser → AST, then the AST feeds both the tree builder (and from
//! there the analysis) and the transpiler.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::analysis::{Grade, GradingKey, Hierarchy, TreeStats};
use crate::dsl::{transpile, Dsl, DslError, Program, TranspileOptions};
use crate::generator::{Generator, GeneratorOptions};
use crate::process::{build_tree, render_tree, ProcessNode};

/// A fully analyzed fork question.
#[derive(Debug, Clone)]
pub struct Question {
    pub source: String,
    pub program: Program,
    pub tree: ProcessNode,
    pub pseudo_code: Vec<String>,
    pub key: GradingKey,
    pub hierarchy: Hierarchy,
    pub stats: TreeStats,
}

impl Question {
    /// Build a question from a fixed source string.
    pub fn from_source(source: &str, options: TranspileOptions) -> Result<Self, DslError> {
        let program = Dsl::parse(source)?;
        let tree = build_tree(&program)?;
        let pseudo_code = transpile(&program, options);
        // Prints hidden behind an exit still get asked about.
        let key = GradingKey::with_expected(&tree, program.print_chars());
        let hierarchy = Hierarchy::from_tree(&tree);
        let stats = TreeStats::from_tree(&tree);

        Ok(Self {
            source: source.to_string(),
            program,
            tree,
            pseudo_code,
            key,
            hierarchy,
            stats,
        })
    }

    /// Generate a fresh program and build a question from it.
    pub fn generate<R: Rng>(
        generator: &mut Generator<R>,
        options: &GeneratorOptions,
        transpile_options: TranspileOptions,
    ) -> Result<Self, DslError> {
        let source = generator.generate(options);
        Self::from_source(&source, transpile_options)
    }

    /// The characters the learner is asked about, in source order.
    pub fn asked(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for c in self.program.print_chars() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }

    pub fn grade(&self, answers: &BTreeMap<char, Option<usize>>) -> Grade {
        self.key.grade(answers)
    }

    pub fn render_tree(&self) -> String {
        render_tree(&self.tree)
    }

    pub fn report(&self) -> Report {
        Report {
            source: self.source.clone(),
            pseudo_code: self.pseudo_code.clone(),
            key: self.key.clone(),
            csv: self.hierarchy.to_csv(),
            labels: self.hierarchy.label_lines(),
            stats: self.stats,
        }
    }
}

/// Serializable summary handed to front ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub source: String,
    pub pseudo_code: Vec<String>,
    pub key: GradingKey,
    pub csv: String,
    pub labels: Vec<String>,
    pub stats: TreeStats,
}
