// src/dag/scheduler.rs

use tracing::{debug, info, warn};

use crate::dag::cycle::diagnose;
use crate::dag::graph::DependencyGraph;
use crate::dag::validate::validate_tasks;
use crate::dag::wavefront::{SortOutcome, sort_waves};
use crate::errors::ScheduleError;
use crate::request::{ScheduleRequest, ScheduleResponse, TaskSpec};

/// Default input-size ceiling for one request.
pub const DEFAULT_MAX_TASKS: usize = 10_000;

/// Bounds applied to a request before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleLimits {
    pub max_tasks: usize,
}

impl Default for ScheduleLimits {
    fn default() -> Self {
        Self {
            max_tasks: DEFAULT_MAX_TASKS,
        }
    }
}

/// A computed schedule together with the waves it was assembled from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    order: Vec<String>,
    waves: Vec<Vec<String>>,
    dependency_count: usize,
}

impl Schedule {
    /// Recommended execution order; a permutation of the request titles.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// The sorted waves, in the order they were released.
    pub fn waves(&self) -> &[Vec<String>] {
        &self.waves
    }

    /// Number of distinct dependency edges in the request.
    pub fn dependency_count(&self) -> usize {
        self.dependency_count
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_order(self) -> Vec<String> {
        self.order
    }
}

/// Stateless scheduling engine.
///
/// Every call is independent: the graph and all intermediate state live only
/// for the duration of that call, so one `Scheduler` can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scheduler {
    limits: ScheduleLimits,
}

impl Scheduler {
    pub fn new(limits: ScheduleLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ScheduleLimits {
        self.limits
    }

    /// Compute the recommended order for `tasks`.
    pub fn schedule(&self, tasks: &[TaskSpec]) -> Result<Vec<String>, ScheduleError> {
        self.schedule_with_trace(tasks).map(Schedule::into_order)
    }

    /// Like [`Scheduler::schedule`] but keeps the per-wave breakdown.
    pub fn schedule_with_trace(&self, tasks: &[TaskSpec]) -> Result<Schedule, ScheduleError> {
        if tasks.is_empty() {
            debug!("empty request; nothing to schedule");
            return Ok(Schedule::default());
        }

        validate_tasks(tasks, &self.limits)?;

        let graph = DependencyGraph::build(tasks);

        match sort_waves(&graph) {
            SortOutcome::Complete { waves } => {
                let waves: Vec<Vec<String>> = waves
                    .into_iter()
                    .map(|wave| {
                        wave.into_iter()
                            .map(|node| graph.title(node).to_string())
                            .collect()
                    })
                    .collect();
                let order: Vec<String> = waves.iter().flatten().cloned().collect();

                info!(
                    tasks = order.len(),
                    waves = waves.len(),
                    "schedule computed"
                );

                Ok(Schedule {
                    order,
                    waves,
                    dependency_count: graph.edge_count(),
                })
            }
            SortOutcome::Stalled { residual, .. } => {
                let err = diagnose(&graph, &residual);
                warn!(
                    unscheduled = residual.len(),
                    error = %err,
                    "circular dependency; no schedule produced"
                );
                Err(err)
            }
        }
    }

    /// Schedule a wire-level request, producing the response body.
    pub fn schedule_request(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduleResponse, ScheduleError> {
        let recommended_order = self.schedule(&request.tasks)?;
        Ok(ScheduleResponse { recommended_order })
    }
}

/// Schedule `tasks` with default limits.
pub fn schedule(tasks: &[TaskSpec]) -> Result<Vec<String>, ScheduleError> {
    Scheduler::default().schedule(tasks)
}
