// src/dag/cycle.rs

//! Diagnosis of a stalled sort.
//!
//! Once the wavefront stalls, every leftover task is either on a cycle or
//! downstream of one. Strongly connected components tell the two apart.

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::NodeIndex;

use crate::dag::graph::DependencyGraph;
use crate::errors::ScheduleError;

/// Build the `CircularDependency` error for the given residual nodes.
pub fn diagnose(graph: &DependencyGraph<'_>, residual: &[NodeIndex]) -> ScheduleError {
    let mut cycles: Vec<Vec<NodeIndex>> = tarjan_scc(graph.inner())
        .into_iter()
        .filter(|component| is_cycle(graph, component))
        .map(|mut component| {
            component.sort_by_key(|node| node.index());
            component
        })
        .collect();
    cycles.sort_by_key(|cycle| cycle[0].index());

    let on_cycle: HashSet<NodeIndex> = cycles.iter().flatten().copied().collect();

    let blocked = residual
        .iter()
        .filter(|node| !on_cycle.contains(*node))
        .map(|node| graph.title(*node).to_string())
        .collect();

    let cycles = cycles
        .into_iter()
        .map(|cycle| {
            cycle
                .into_iter()
                .map(|node| graph.title(node).to_string())
                .collect()
        })
        .collect();

    ScheduleError::CircularDependency { cycles, blocked }
}

fn is_cycle(graph: &DependencyGraph<'_>, component: &[NodeIndex]) -> bool {
    match component {
        [] => false,
        [single] => graph.dependents(*single).any(|next| next == *single),
        _ => true,
    }
}
