// src/request/mod.rs

//! Scheduling request/response model and loading.
//!
//! - [`model`] defines the wire shapes (`ScheduleRequest`, `TaskSpec`,
//!   `ScheduleResponse`, `ErrorResponse`).
//! - [`loader`] reads a request from a JSON or TOML file, or from stdin.

pub mod loader;
pub mod model;

pub use loader::{load_request_from_path, load_request_from_reader, parse_request};
pub use model::{ErrorResponse, ScheduleRequest, ScheduleResponse, TaskSpec};
