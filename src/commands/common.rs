// src/commands/common.rs

use std::io;
use std::path::Path;
use std::process::ExitCode;

use thiserror::Error;

use crate::cli::ColorMode;
use crate::config::GeneratorConfig;
use crate::errors::{ConfigError, GenerateError, render};

/// Exit code for names that match no sample type.
pub const EXIT_UNKNOWN_TYPE: u8 = 2;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    /// Report the error on stderr and pick the process exit code.
    pub fn report(&self, color: ColorMode) -> ExitCode {
        match self {
            CommandError::UnknownType(_) => {
                eprintln!("error: {}", self);
                ExitCode::from(EXIT_UNKNOWN_TYPE)
            }
            CommandError::Config(e) => {
                eprint!("{}", render(e, color.use_color()));
                ExitCode::FAILURE
            }
            CommandError::Generate(e) => {
                eprint!("{}", render(e, color.use_color()));
                ExitCode::FAILURE
            }
            CommandError::Io(_) => {
                eprintln!("error: {}", self);
                ExitCode::FAILURE
            }
        }
    }
}

/// Configuration from an optional file, with command-line overrides applied.
pub fn build_config(
    path: Option<&Path>,
    seed: Option<u64>,
    max_depth: Option<usize>,
) -> Result<GeneratorConfig, ConfigError> {
    let mut config = match path {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(max_depth) = max_depth {
        config = config.with_max_depth(max_depth);
    }
    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}
