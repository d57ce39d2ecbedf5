// src/dag/wavefront.rs

//! Wave-by-wave topological sort.
//!
//! Each round takes every task whose dependencies are all scheduled (the
//! frontier), sorts that wave by urgency, appends it to the output and
//! releases whatever it unblocks into the *next* frontier. Sorting is local
//! to a wave: a task never jumps ahead of a dependency because of its due
//! date.

use std::cmp::Ordering;

use petgraph::graph::NodeIndex;
use tracing::{debug, trace};

use crate::dag::graph::DependencyGraph;

/// Result of running the wavefront over a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// Every task was scheduled. Concatenating the waves gives the order.
    Complete { waves: Vec<Vec<NodeIndex>> },
    /// The frontier ran dry with tasks left over; `residual` is non-empty
    /// and in input order.
    Stalled {
        waves: Vec<Vec<NodeIndex>>,
        residual: Vec<NodeIndex>,
    },
}

/// Tie-break for tasks that are ready at the same time: earliest due date,
/// then fewest estimated hours, then earliest input position.
pub fn compare_ready(graph: &DependencyGraph<'_>, a: NodeIndex, b: NodeIndex) -> Ordering {
    let (ta, tb) = (graph.task(a), graph.task(b));
    ta.due_date
        .cmp(&tb.due_date)
        .then_with(|| ta.estimated_hours.cmp(&tb.estimated_hours))
        .then_with(|| a.index().cmp(&b.index()))
}

pub fn sort_waves(graph: &DependencyGraph<'_>) -> SortOutcome {
    let mut in_degree = graph.in_degrees().to_vec();
    let mut frontier: Vec<NodeIndex> = graph
        .nodes()
        .filter(|node| in_degree[node.index()] == 0)
        .collect();

    let mut waves: Vec<Vec<NodeIndex>> = Vec::new();
    let mut scheduled = 0usize;

    while !frontier.is_empty() {
        let mut wave = frontier;
        wave.sort_by(|a, b| compare_ready(graph, *a, *b));

        let mut next = Vec::new();
        for &node in wave.iter() {
            for dependent in graph.dependents(node) {
                let remaining = &mut in_degree[dependent.index()];
                *remaining -= 1;
                if *remaining == 0 {
                    next.push(dependent);
                }
            }
        }

        scheduled += wave.len();
        trace!(
            wave = waves.len(),
            size = wave.len(),
            released = next.len(),
            "wave scheduled"
        );

        waves.push(wave);
        frontier = next;
    }

    if scheduled == graph.len() {
        debug!(waves = waves.len(), tasks = scheduled, "all tasks scheduled");
        return SortOutcome::Complete { waves };
    }

    let residual: Vec<NodeIndex> = graph
        .nodes()
        .filter(|node| in_degree[node.index()] > 0)
        .collect();

    debug!(
        scheduled,
        remaining = residual.len(),
        "frontier exhausted with tasks left unscheduled"
    );

    SortOutcome::Stalled { waves, residual }
}
