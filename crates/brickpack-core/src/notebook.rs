//! Databricks notebook assembly and output.
//!
//! ```text
//! features/ ───► SubPackage ───► order_modules ───► NotebookGenerator ───► _DBNB_features.py
//! ```
//!
//! The generated file is a Databricks "source" notebook: plain Python with
//! magic comments delimiting the cells. Each module becomes one cell,
//! emitted in dependency order with its intra-package imports disabled.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::graph::order_modules;
use crate::imports::disable_qualified_imports;
use crate::package::{MODULE_EXTENSION, SubPackage};

/// First line of every Databricks source notebook.
pub const NOTEBOOK_HEADER: &str = "# Databricks notebook source\n";

/// Marker delimiting notebook cells.
pub const CELL_SEPARATOR: &str = "# COMMAND ----------";

/// Prefix of generated notebook filenames.
pub const OUTPUT_PREFIX: &str = "_DBNB_";

/// Generator for flattened Databricks notebooks.
pub struct NotebookGenerator;

impl NotebookGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Assemble the notebook text for a subpackage.
    ///
    /// Modules are ordered by their dependency graph; each cell is the
    /// module source preceded by a header comment naming the file and
    /// followed by the cell separator. Qualified sibling imports are
    /// commented out, everything else is emitted verbatim.
    pub fn generate(&self, subpackage: &SubPackage) -> Result<String> {
        let ordered = order_modules(&subpackage.modules)?;
        let prefix = subpackage.qualified_prefix();

        let mut notebook = String::from(NOTEBOOK_HEADER);
        for module in ordered {
            notebook.push_str(&format!("\n# {}\n", module.filename));
            notebook.push_str(&disable_qualified_imports(&module.source, &prefix));
            notebook.push_str(&format!("\n{}\n", CELL_SEPARATOR));
        }

        Ok(notebook)
    }

    /// Assemble the notebook and write it into `output_dir`.
    ///
    /// Returns the path of the written file. Nothing is written when
    /// ordering fails.
    pub fn write(&self, subpackage: &SubPackage, output_dir: &Path) -> Result<PathBuf> {
        let notebook = self.generate(subpackage)?;
        let path = default_notebook_path(&subpackage.name, output_dir);

        fs::write(&path, notebook).map_err(|e| Error::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(path)
    }
}

impl Default for NotebookGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Conventional notebook path for a subpackage name.
pub fn default_notebook_path(subpackage_name: &str, output_dir: &Path) -> PathBuf {
    output_dir.join(format!(
        "{}{}.{}",
        OUTPUT_PREFIX, subpackage_name, MODULE_EXTENSION
    ))
}

/// Flatten the subpackage at `dir` into a notebook in `output_dir`.
///
/// `package_root` overrides the qualified-import root; when `None` it is
/// inferred from the parent directory name.
pub fn flatten_to_notebook(
    dir: impl AsRef<Path>,
    package_root: Option<&str>,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let subpackage = SubPackage::discover(dir, package_root)?;
    let path = NotebookGenerator::new().write(&subpackage, output_dir.as_ref())?;

    tracing::info!(
        "Flattened {} → {} ({} modules)",
        subpackage.path.display(),
        path.display(),
        subpackage.modules.len()
    );

    Ok(path)
}
