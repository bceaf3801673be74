//! Subpackage and module discovery.
//!
//! A subpackage is a directory of `.py` modules flattened as one unit.
//! Discovery reads every module eagerly and extracts its sibling
//! dependencies, so later stages never touch the filesystem until the
//! final notebook write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::imports;

/// File extension of module sources.
pub const MODULE_EXTENSION: &str = "py";

/// Filename substring reserved for generated notebooks. Files carrying it
/// are skipped on discovery so a previous run's output is never
/// reprocessed as a module.
pub const RESERVED_MARKER: &str = "DBNB";

/// A single source module inside a subpackage.
#[derive(Debug, Clone)]
pub struct Module {
    /// Filename including extension (e.g. `cleaning.py`).
    pub filename: String,
    /// Module name (filename minus extension).
    pub name: String,
    /// Full path to the source file.
    pub path: PathBuf,
    /// Raw source text.
    pub source: String,
    /// Names of sibling modules this module imports.
    pub dependencies: Vec<String>,
}

impl Module {
    /// Read a module file and extract its sibling dependencies.
    fn read(path: &Path, subpackage: &str) -> Result<Self> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::InvalidSubpackage(format!("bad module path: {}", path.display()))
            })?;
        let name = filename
            .strip_suffix(&format!(".{}", MODULE_EXTENSION))
            .unwrap_or(&filename)
            .to_string();

        let source = fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let dependencies = imports::scan_dependencies(&source, subpackage);

        Ok(Self {
            filename,
            name,
            path: path.to_path_buf(),
            source,
            dependencies,
        })
    }
}

/// A directory of modules treated as one unit for ordering and output.
#[derive(Debug, Clone)]
pub struct SubPackage {
    /// Subpackage name (directory stem).
    pub name: String,
    /// Enclosing package name, the root of the qualified import prefix.
    pub package_root: String,
    /// Path to the subpackage directory.
    pub path: PathBuf,
    /// Modules in discovery order (sorted by filename).
    pub modules: Vec<Module>,
}

impl SubPackage {
    /// Discover the modules of the subpackage at `dir`.
    ///
    /// `package_root` is the enclosing package name; when `None` it is
    /// inferred from the parent directory's name.
    ///
    /// Directory entries are sorted by filename before reading, so
    /// discovery order (and everything derived from it) is deterministic
    /// across runs and platforms.
    pub fn discover(dir: impl AsRef<Path>, package_root: Option<&str>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::InvalidSubpackage(format!(
                "not a directory: {}",
                dir.display()
            )));
        }

        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::InvalidSubpackage(format!("no subpackage name in {}", dir.display()))
            })?;

        let package_root = match package_root {
            Some(root) => root.to_string(),
            None => dir
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    Error::InvalidSubpackage(format!(
                        "cannot infer package root above {}",
                        dir.display()
                    ))
                })?,
        };

        let mut filenames = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().into_owned();
            if is_module_filename(&filename) {
                filenames.push(filename);
            }
        }
        filenames.sort();

        let modules = filenames
            .iter()
            .map(|f| Module::read(&dir.join(f), &name))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            subpackage = %name,
            modules = modules.len(),
            "discovered subpackage"
        );

        Ok(Self {
            name,
            package_root,
            path: dir.to_path_buf(),
            modules,
        })
    }

    /// The fully qualified import prefix shared by all sibling imports.
    pub fn qualified_prefix(&self) -> String {
        format!("from {}.{}.", self.package_root, self.name)
    }
}

/// Whether a directory entry counts as a module source.
fn is_module_filename(filename: &str) -> bool {
    let is_source = filename
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == MODULE_EXTENSION);
    is_source && !filename.contains(RESERVED_MARKER)
}
