// src/commands/demo.rs
//! The default run: an `Example`, a handful of `Shape`s with their
//! geometry, and the `Person`/`Address` cycle report.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use super::common::CommandError;
use crate::cli::ColorMode;
use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::registry::ImplementationIndex;
use crate::sample::{self, Types, shape_area, shape_perimeter};
use crate::value::Value;

const SHAPE_ROUNDS: usize = 5;

pub fn run_demo(config: &GeneratorConfig, color: ColorMode) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => e.report(color),
    }
}

/// Each case gets a fresh generator; the index and its catalog are shared.
pub fn execute(config: &GeneratorConfig, out: &mut dyn Write) -> Result<(), CommandError> {
    let (catalog, types) = sample::catalog();
    let index = Arc::new(ImplementationIndex::new(
        Arc::new(catalog),
        config.scan_module.clone(),
    ));
    let fresh = || Generator::with_config(Arc::clone(&index), config);

    example_case(&mut fresh(), &types, out)?;
    writeln!(out, "\n")?;
    shape_case(&mut fresh(), &types, out)?;
    writeln!(out, "\n")?;
    cycle_case(&mut fresh(), &types, out)
}

fn example_case(
    generator: &mut Generator,
    types: &Types,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    match generator.generate_type(types.example)? {
        Some(value) => writeln!(out, "{value}")?,
        None => writeln!(out, "null")?,
    }
    Ok(())
}

fn shape_case(
    generator: &mut Generator,
    types: &Types,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    writeln!(out, "Shape generation:")?;
    for _ in 0..SHAPE_ROUNDS {
        let value = generator.generate_type(types.shape)?;
        let shape = value.as_ref().and_then(Value::as_object);
        let geometry = shape.and_then(|s| Some((s, shape_area(s)?, shape_perimeter(s)?)));
        match geometry {
            Some((shape, area, perimeter)) => writeln!(
                out,
                "Generated: {} - Area: {area:.3}, Perimeter: {perimeter:.3}",
                shape.type_name
            )?,
            None => writeln!(out, "Failed to generate Shape")?,
        }
    }
    Ok(())
}

fn cycle_case(
    generator: &mut Generator,
    types: &Types,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    writeln!(out, "Cycle detection")?;
    writeln!(out, "===============\n")?;

    writeln!(out, "Generating Person (Person -> Address -> Person)...")?;
    if let Some(Value::Object(person)) = generator.generate_type(types.person)? {
        writeln!(out, "Person generated")?;
        writeln!(out, "  - name: {}", text(person.field("name")))?;
        match person.object("address") {
            Some(address) => {
                writeln!(out, "  - address: {}", text(address.field("street")))?;
                let owner = cycle_status(address.has_field("owner"), address.field("owner"));
                writeln!(out, "  - address.owner: {owner}")?;
            }
            None => writeln!(out, "  - address: null")?,
        }
    }

    writeln!(out, "\nGenerating Address (Address -> Person -> Address)...")?;
    if let Some(Value::Object(address)) = generator.generate_type(types.address)? {
        writeln!(out, "Address generated")?;
        writeln!(out, "  - street: {}", text(address.field("street")))?;
        match address.object("owner") {
            Some(owner) => {
                writeln!(out, "  - owner: {}", text(owner.field("name")))?;
                let back = cycle_status(owner.has_field("address"), owner.field("address"));
                writeln!(out, "  - owner.address: {back}")?;
            }
            None => writeln!(out, "  - owner: null")?,
        }
    }

    writeln!(out, "\nCycles ended without unbounded recursion.")?;
    Ok(())
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Str(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    }
}

fn cycle_status(declared: bool, value: Option<&Value>) -> &'static str {
    match (declared, value) {
        (true, None) => "null (cycle broken)",
        (_, Some(_)) => "present (cycle not broken)",
        (false, None) => "missing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_output(seed: u64) -> String {
        let config = GeneratorConfig::default().with_seed(seed);
        let mut out = Vec::new();
        execute(&config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_all_three_cases() {
        let output = demo_output(11);
        assert!(output.starts_with("Example { id: "), "{output}");
        assert!(output.contains("Shape generation:"));
        assert_eq!(output.matches("Generated: ").count(), SHAPE_ROUNDS);
        assert!(!output.contains("Failed to generate Shape"));
        assert!(output.contains("Person generated"));
        assert!(output.contains("Address generated"));
    }

    #[test]
    fn cycles_are_reported_broken() {
        let output = demo_output(12);
        assert!(output.contains("  - address.owner: null (cycle broken)"), "{output}");
        assert!(output.contains("  - owner.address: null (cycle broken)"), "{output}");
        assert!(!output.contains("cycle not broken"));
    }

    #[test]
    fn seeded_demo_is_reproducible() {
        assert_eq!(demo_output(5), demo_output(5));
    }
}
