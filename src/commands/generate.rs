// src/commands/generate.rs

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use super::common::CommandError;
use crate::cli::ColorMode;
use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::sample;
use crate::value::Value;

/// Generate `count` values for each named sample type and print them.
pub fn generate_types(
    names: &[String],
    count: usize,
    json: bool,
    config: &GeneratorConfig,
    color: ColorMode,
) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(names, count, json, config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => e.report(color),
    }
}

/// Names are all resolved before anything is generated, so an unknown name
/// produces no partial output.
pub fn execute(
    names: &[String],
    count: usize,
    json: bool,
    config: &GeneratorConfig,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    let (catalog, _) = sample::catalog();
    let ids = names
        .iter()
        .map(|name| {
            catalog
                .find(name)
                .ok_or_else(|| CommandError::UnknownType(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut generator = Generator::from_config(Arc::new(catalog), config);
    for id in ids {
        for _ in 0..count {
            let value = generator.generate_type(id)?;
            let name = generator.catalog().name_of(id);
            write_value(out, name, value.as_ref(), json)?;
        }
    }
    Ok(())
}

fn write_value(
    out: &mut dyn Write,
    name: &str,
    value: Option<&Value>,
    json: bool,
) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &value).map_err(io::Error::from)?;
        return writeln!(out);
    }
    match value {
        Some(v) => writeln!(out, "{name}: {v}"),
        None => writeln!(out, "{name}: null"),
    }
}
