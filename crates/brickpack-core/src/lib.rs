//! Core engine for brickpack.
//!
//! This crate provides:
//! - Module discovery for a Python subpackage directory
//! - Import scanning for intra-package dependencies
//! - Dependency graph construction and topological ordering
//! - Databricks notebook assembly and output

pub mod error;
pub mod graph;
pub mod imports;
pub mod notebook;
pub mod package;

pub use error::{Error, Result};
pub use graph::{ModuleGraph, order_modules};
pub use imports::DISABLING_MARKER;
pub use notebook::{
    CELL_SEPARATOR, NOTEBOOK_HEADER, NotebookGenerator, OUTPUT_PREFIX, default_notebook_path,
    flatten_to_notebook,
};
pub use package::{MODULE_EXTENSION, Module, RESERVED_MARKER, SubPackage};
