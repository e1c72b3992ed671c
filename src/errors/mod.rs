// src/errors/mod.rs
//! Errors surfaced by the generator (T0xxx) and configuration loading (T1xxx).
//!
//! Empty results (ineligible type, cycle, depth cut-off, missing
//! implementation) are not errors; they come back as `Ok(None)`.

#![allow(unused_assignments)] // False positives from thiserror derive

pub mod report;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub use report::render;

/// Failure raised by a constructor body or by [`Args`](crate::catalog::Args)
/// accessors while building an instance.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ConstructError {
    #[error("argument {index} is absent")]
    #[diagnostic(code(T0101))]
    MissingArgument { index: usize },

    #[error("argument {index}: expected {expected}, found {found}")]
    #[diagnostic(code(T0102))]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{reason}")]
    #[diagnostic(code(T0103))]
    Rejected { reason: String },
}

impl ConstructError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        ConstructError::Rejected {
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum GenerateError {
    #[error("constructor for '{type_name}' failed")]
    #[diagnostic(
        code(T0001),
        help("the selected constructor is the one with the most parameters")
    )]
    Construction {
        type_name: String,
        #[source]
        #[diagnostic_source]
        source: ConstructError,
    },
}

impl GenerateError {
    /// Name of the type whose constructor failed.
    pub fn type_name(&self) -> &str {
        match self {
            GenerateError::Construction { type_name, .. } => type_name,
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    #[diagnostic(code(T1001))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config '{origin}'")]
    #[diagnostic(code(T1002))]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}
