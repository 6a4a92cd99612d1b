//! Configuration — question defaults loaded from ~/.forkquiz/config.yaml.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dsl::TranspileOptions;
use crate::generator::{Difficulty, GeneratorOptions};

/// Quiz configuration loaded from YAML. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Generator knobs used when no difficulty is selected.
    pub generator: GeneratorOptions,
    /// Preset that overrides `generator` when set.
    pub difficulty: Option<Difficulty>,
    /// Fixed RNG seed. None = fresh entropy per run.
    pub seed: Option<u64>,
    /// Spaces per nesting level in rendered pseudo-code.
    pub indent: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorOptions::default(),
            difficulty: None,
            seed: None,
            indent: TranspileOptions::default().indent,
        }
    }
}

impl QuizConfig {
    /// Standard location of the config file.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".forkquiz").join("config.yaml"))
    }

    /// Load config from the standard path.
    /// Returns None if the file doesn't exist or can't be parsed.
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match serde_yaml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                None
            }
        }
    }

    pub fn transpile_options(&self) -> TranspileOptions {
        TranspileOptions {
            indent: self.indent,
        }
    }
}
