//! Dependency graph construction and topological ordering.
//!
//! Nodes are modules (by discovery index), edges run from a dependency to
//! the module that imports it. Only modules that participate in at least
//! one edge enter the graph; the rest keep their discovery order and are
//! appended after the sorted modules.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::package::Module;

/// Directed dependency graph over a subpackage's modules.
pub struct ModuleGraph {
    /// Edges run dependency → dependent; node weights are discovery indices.
    graph: DiGraph<usize, ()>,
    /// Discovery index to node index mapping.
    node_indices: FxHashMap<usize, NodeIndex>,
}

impl ModuleGraph {
    /// Build the graph from modules in discovery order.
    ///
    /// Every dependency name must resolve to exactly one sibling module;
    /// zero or multiple matches is a fatal lookup error.
    pub fn build(modules: &[Module]) -> Result<Self> {
        let mut by_name: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
        for (index, module) in modules.iter().enumerate() {
            by_name.entry(module.name.as_str()).or_default().push(index);
        }

        let mut graph = DiGraph::new();
        let mut node_indices = FxHashMap::default();

        for (dependent, module) in modules.iter().enumerate() {
            for dep_name in &module.dependencies {
                let dependency = resolve(&by_name, dep_name, &module.name)?;
                let from = node_for(&mut graph, &mut node_indices, dependency);
                let to = node_for(&mut graph, &mut node_indices, dependent);
                graph.add_edge(from, to, ());
            }
        }

        Ok(Self {
            graph,
            node_indices,
        })
    }

    /// Discovery indices in execution order: a topological sort of the
    /// graph, followed by the isolated modules in discovery order.
    pub fn execution_order(&self, modules: &[Module]) -> Result<Vec<usize>> {
        let mut order: Vec<usize> = toposort(&self.graph, None)
            .map(|nodes| nodes.into_iter().map(|idx| self.graph[idx]).collect())
            .map_err(|cycle| {
                let index = self.graph[cycle.node_id()];
                Error::CyclicDependency(format!(
                    "module '{}' is part of an import cycle",
                    modules[index].name
                ))
            })?;

        for index in 0..modules.len() {
            if !self.node_indices.contains_key(&index) {
                order.push(index);
            }
        }

        Ok(order)
    }

    /// Number of modules participating in at least one dependency edge.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether no module has any dependency relationship.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

/// Resolve a dependency name to exactly one discovery index.
fn resolve(by_name: &FxHashMap<&str, Vec<usize>>, dep_name: &str, importer: &str) -> Result<usize> {
    match by_name.get(dep_name).map(Vec::as_slice) {
        Some([index]) => Ok(*index),
        Some(_) => Err(Error::AmbiguousModule(format!(
            "'{}' imported by '{}' matches more than one module",
            dep_name, importer
        ))),
        None => Err(Error::ModuleNotFound(format!(
            "'{}' imported by '{}' is not a module of this subpackage",
            dep_name, importer
        ))),
    }
}

fn node_for(
    graph: &mut DiGraph<usize, ()>,
    node_indices: &mut FxHashMap<usize, NodeIndex>,
    index: usize,
) -> NodeIndex {
    *node_indices
        .entry(index)
        .or_insert_with(|| graph.add_node(index))
}

/// Compute the dependency-respecting order of `modules`.
///
/// Returns references in the order the notebook should emit them.
pub fn order_modules(modules: &[Module]) -> Result<Vec<&Module>> {
    let graph = ModuleGraph::build(modules)?;
    let order = graph.execution_order(modules)?;
    Ok(order.into_iter().map(|i| &modules[i]).collect())
}
