// src/dag/validate.rs

//! Request validation, run before any graph is built.
//!
//! Checks happen in a fixed order and stop at the first failure:
//! size ceiling, blank titles, zero estimates, duplicate titles, and finally
//! dependency references.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::dag::scheduler::ScheduleLimits;
use crate::errors::ScheduleError;
use crate::request::TaskSpec;

pub fn validate_tasks(tasks: &[TaskSpec], limits: &ScheduleLimits) -> Result<(), ScheduleError> {
    ensure_within_limit(tasks, limits)?;
    validate_titles(tasks)?;
    validate_estimates(tasks)?;
    ensure_unique_titles(tasks)?;
    validate_dependencies(tasks)?;

    debug!(tasks = tasks.len(), "request validated");
    Ok(())
}

fn ensure_within_limit(tasks: &[TaskSpec], limits: &ScheduleLimits) -> Result<(), ScheduleError> {
    if tasks.len() > limits.max_tasks {
        warn!(
            count = tasks.len(),
            limit = limits.max_tasks,
            "request exceeds task limit"
        );
        return Err(ScheduleError::TooManyTasks {
            count: tasks.len(),
            limit: limits.max_tasks,
        });
    }
    Ok(())
}

fn validate_titles(tasks: &[TaskSpec]) -> Result<(), ScheduleError> {
    match tasks.iter().position(|t| t.title.trim().is_empty()) {
        Some(position) => Err(ScheduleError::EmptyTitle { position }),
        None => Ok(()),
    }
}

fn validate_estimates(tasks: &[TaskSpec]) -> Result<(), ScheduleError> {
    match tasks.iter().find(|t| t.estimated_hours == 0) {
        Some(task) => Err(ScheduleError::InvalidEstimate {
            task: task.title.clone(),
        }),
        None => Ok(()),
    }
}

fn ensure_unique_titles(tasks: &[TaskSpec]) -> Result<(), ScheduleError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.title.as_str()) {
            warn!(task = %task.title, "duplicate task title in request");
            return Err(ScheduleError::DuplicateTitle {
                task: task.title.clone(),
            });
        }
    }
    Ok(())
}

fn validate_dependencies(tasks: &[TaskSpec]) -> Result<(), ScheduleError> {
    let titles: HashSet<&str> = tasks.iter().map(|t| t.title.as_str()).collect();

    for task in tasks {
        for dep in task.dependencies.iter() {
            if !titles.contains(dep.as_str()) {
                warn!(
                    task = %task.title,
                    dependency = %dep,
                    "dependency refers to a task outside the request"
                );
                return Err(ScheduleError::UnknownDependency {
                    task: task.title.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}
