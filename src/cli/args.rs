// src/cli/args.rs

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Color mode for diagnostic output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Whether diagnostics written to stderr should be colored.
    pub fn use_color(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stderr().is_terminal(),
        }
    }
}

/// Generate random fixture values for the sample type family
#[derive(Parser, Debug)]
#[command(name = "typefill")]
#[command(version)]
#[command(about = "Fill type descriptors with random fixture data", long_about = None)]
pub struct Cli {
    /// Types to generate, by simple (`Product`) or qualified
    /// (`fixtures.Product`) name. Without any, runs the demonstration.
    #[arg(value_name = "TYPE")]
    pub types: Vec<String>,

    /// Values to generate per type
    #[arg(long, short = 'n', default_value = "1")]
    pub count: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Recursion ceiling (overrides the config file)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print one JSON document per value
    #[arg(long)]
    pub json: bool,

    /// Color output: auto, always, never
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}
