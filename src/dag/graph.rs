// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, warn};

use crate::request::TaskSpec;

/// Request-scoped dependency graph.
///
/// Node `i` is the task at input position `i`, so a [`NodeIndex`] doubles as
/// the input-order tie-break key. Edges run dependency → dependent.
///
/// Assumes the task list has already passed [`validate_tasks`]:
/// titles are unique and every dependency resolves.
///
/// [`validate_tasks`]: crate::dag::validate::validate_tasks
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    graph: DiGraph<&'a TaskSpec, ()>,
    /// Number of distinct dependencies per node, indexed by node index.
    in_degree: Vec<usize>,
}

impl<'a> DependencyGraph<'a> {
    pub fn build(tasks: &'a [TaskSpec]) -> Self {
        let mut graph: DiGraph<&'a TaskSpec, ()> =
            DiGraph::with_capacity(tasks.len(), tasks.len());
        let mut index: HashMap<&'a str, NodeIndex> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let node = graph.add_node(task);
            index.insert(task.title.as_str(), node);
        }

        let mut in_degree = vec![0usize; tasks.len()];
        let mut seen: HashSet<NodeIndex> = HashSet::new();

        for (position, task) in tasks.iter().enumerate() {
            let to = NodeIndex::new(position);
            seen.clear();
            for dep in task.dependencies.iter() {
                let Some(&from) = index.get(dep.as_str()) else {
                    // Unreachable after validation.
                    warn!(task = %task.title, dependency = %dep, "skipping unresolved dependency");
                    continue;
                };
                // Repeated entries in one dependency list are a single edge.
                if seen.insert(from) {
                    graph.add_edge(from, to, ());
                    in_degree[position] += 1;
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dependency graph built"
        );

        Self { graph, in_degree }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn task(&self, node: NodeIndex) -> &'a TaskSpec {
        self.graph[node]
    }

    pub fn title(&self, node: NodeIndex) -> &'a str {
        self.graph[node].title.as_str()
    }

    /// Initial in-degree of every node, indexed by node index.
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    /// Tasks that list `node` as a dependency.
    pub fn dependents(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Outgoing)
    }

    pub(crate) fn inner(&self) -> &DiGraph<&'a TaskSpec, ()> {
        &self.graph
    }
}
