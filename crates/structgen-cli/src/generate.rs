//! `generate` and `list` commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use structgen_core::Registry;

/// Run a generator and print the code, or write it to `output`.
pub fn run(
    registry: &Registry,
    template: &str,
    input_file: Option<PathBuf>,
    inline: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let input = read_input(input_file.as_deref(), inline)?;
    let code = registry
        .generate(template, &input)
        .with_context(|| format!("Failed to generate '{template}'"))?;

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{code}\n"))
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            tracing::info!(path = %path.display(), "wrote generated code");
        }
        None => println!("{code}"),
    }

    Ok(())
}

/// Inline input wins over a file; one of them is required.
pub fn read_input(input_file: Option<&Path>, inline: Option<String>) -> Result<String> {
    if let Some(inline) = inline.filter(|s| !s.is_empty()) {
        return Ok(inline);
    }

    let path = input_file
        .ok_or_else(|| anyhow::anyhow!("Either an input file or --input is required"))?;

    std::fs::read_to_string(path).with_context(|| format!("Failed to read input file: {:?}", path))
}

/// One line per generator, sorted by name
pub fn format_generators(registry: &Registry) -> String {
    let mut generators = registry.list_all();
    generators.sort_by(|a, b| a.name.cmp(&b.name));

    let width = generators.iter().map(|g| g.name.len()).max().unwrap_or(0);
    generators
        .iter()
        .map(|g| format!("{:<width$}  {}", g.name, g.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `list` command implementation
pub fn list(registry: &Registry) {
    println!("{}", format_generators(registry));
}
