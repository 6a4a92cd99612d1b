//! Forkquiz — generate, explain and grade `fork()` process-hierarchy questions.

pub mod analysis;
pub mod config;
pub mod dsl;
pub mod generator;
pub mod process;
pub mod quiz;
