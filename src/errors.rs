// src/errors.rs

//! Crate-wide error types.
//!
//! [`ScheduleError`] is what the scheduling engine rejects a request with.
//! [`TaskwaveError`] wraps everything the tool around the engine can fail on
//! (config, I/O, parsing).

use thiserror::Error;

/// Why a scheduling request was rejected. No partial order is ever produced
/// alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Task '{task}' has a dependency on non-existent task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error(
        "Circular dependency detected in tasks. Cannot create a valid schedule.{}",
        describe_residual(.cycles, .blocked)
    )]
    CircularDependency {
        /// Each inner list is one cycle, members in input order.
        cycles: Vec<Vec<String>>,
        /// Unscheduled tasks that are not on a cycle but wait on one.
        blocked: Vec<String>,
    },

    #[error("Task title at position {position} is empty")]
    EmptyTitle { position: usize },

    #[error("Task '{task}' appears more than once in the request")]
    DuplicateTitle { task: String },

    #[error("Task '{task}' must have estimated hours greater than zero")]
    InvalidEstimate { task: String },

    #[error("Request contains {count} tasks; the limit is {limit}")]
    TooManyTasks { count: usize, limit: usize },
}

impl ScheduleError {
    /// Every unscheduled title carried by a `CircularDependency`, cycle
    /// members first. Empty for other kinds.
    pub fn residual_titles(&self) -> Vec<&str> {
        match self {
            ScheduleError::CircularDependency { cycles, blocked } => cycles
                .iter()
                .flatten()
                .chain(blocked.iter())
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn describe_residual(cycles: &[Vec<String>], blocked: &[String]) -> String {
    let mut out = String::new();
    for cycle in cycles {
        out.push_str(&format!(" Cycle: [{}].", cycle.join(", ")));
    }
    if !blocked.is_empty() {
        out.push_str(&format!(" Blocked: [{}].", blocked.join(", ")));
    }
    out
}

#[derive(Error, Debug)]
pub enum TaskwaveError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type Result<T> = std::result::Result<T, TaskwaveError>;
