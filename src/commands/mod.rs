// src/commands/mod.rs
//! Subcommand bodies for the `typefill` binary.

pub mod common;
pub mod demo;
pub mod generate;

pub use common::{CommandError, build_config};
pub use demo::run_demo;
pub use generate::generate_types;
