//! Order command implementation for the brickpack CLI.
//!
//! Dry run: resolves the dependency order and prints it without writing
//! a notebook.

use std::path::Path;

use brickpack_core::{SubPackage, order_modules};

use crate::colors;

/// Execute the order command.
pub fn execute(path: &str, package: Option<&str>) -> anyhow::Result<()> {
    let dir = Path::new(path);
    if !dir.exists() {
        anyhow::bail!("Subpackage not found: {}", path);
    }
    let dir = dir.canonicalize()?;

    let subpackage = SubPackage::discover(&dir, package)?;
    let ordered = order_modules(&subpackage.modules)?;

    println!(
        "\n{}Module order for '{}'{}",
        colors::BOLD,
        subpackage.name,
        colors::RESET
    );
    println!("{}", "─".repeat(50));

    if ordered.is_empty() {
        println!("{}No modules found.{}", colors::YELLOW, colors::RESET);
        return Ok(());
    }

    for (i, module) in ordered.iter().enumerate() {
        if module.dependencies.is_empty() {
            println!("  {:>2}. {}", i + 1, module.filename);
        } else {
            println!(
                "  {:>2}. {} {}(after: {}){}",
                i + 1,
                module.filename,
                colors::DIM,
                module.dependencies.join(", "),
                colors::RESET
            );
        }
    }

    Ok(())
}
