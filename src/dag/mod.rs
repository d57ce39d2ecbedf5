// src/dag/mod.rs

//! The scheduling engine.
//!
//! A request flows through these stages in order:
//! - [`validate`] rejects malformed input and unknown dependency references.
//! - [`graph`] maps titles to node indices and builds forward edges plus
//!   in-degrees.
//! - [`wavefront`] sorts ready tasks wave by wave.
//! - [`cycle`] explains a stalled sort as cycles plus blocked tasks.
//! - [`scheduler`] ties the stages together behind [`Scheduler`].

pub mod cycle;
pub mod graph;
pub mod scheduler;
pub mod validate;
pub mod wavefront;

pub use graph::DependencyGraph;
pub use scheduler::{DEFAULT_MAX_TASKS, Schedule, ScheduleLimits, Scheduler, schedule};
pub use wavefront::SortOutcome;
