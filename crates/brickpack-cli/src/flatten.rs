//! Flatten command implementation for the brickpack CLI.
//!
//! Discovers the subpackage, resolves the module order and writes the
//! Databricks notebook.

use std::path::{Path, PathBuf};
use std::time::Instant;

use brickpack_core::{NotebookGenerator, SubPackage, order_modules};

use crate::colors;

/// Execute the flatten command.
pub fn execute(path: &str, output: Option<&str>, package: Option<&str>) -> anyhow::Result<()> {
    let dir = Path::new(path);
    if !dir.exists() {
        anyhow::bail!("Subpackage not found: {}", path);
    }
    let dir = dir.canonicalize()?;

    let output_dir = match output {
        Some(out) => PathBuf::from(out),
        None => std::env::current_dir()?,
    };

    println!(
        "\n{}Brickpack Flatten{} - Converting to Databricks notebook",
        colors::BOLD,
        colors::RESET
    );
    println!("{}", "─".repeat(50));

    let start = Instant::now();

    let subpackage = SubPackage::discover(&dir, package)?;
    if subpackage.modules.is_empty() {
        println!(
            "\n{}No modules found in {}.{}",
            colors::YELLOW,
            dir.display(),
            colors::RESET
        );
    }

    for (i, module) in order_modules(&subpackage.modules)?.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, module.filename);
    }

    let notebook_path = NotebookGenerator::new().write(&subpackage, &output_dir)?;

    let elapsed = start.elapsed();
    println!(
        "\n{}✓{} Wrote {} ({} modules, {:.2}ms)",
        colors::GREEN,
        colors::RESET,
        notebook_path.display(),
        subpackage.modules.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}
