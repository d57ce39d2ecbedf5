// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod request;
pub mod types;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::dag::Scheduler;
use crate::errors::ScheduleError;
use crate::request::load_request_from_path;

pub use crate::dag::schedule;

/// How a CLI invocation ended, when it got as far as scheduling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// An order was computed and printed.
    Scheduled,
    /// `--check` passed; a summary was printed.
    Checked,
    /// The engine rejected the request; the error body was printed.
    Rejected(ScheduleError),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Scheduled | RunOutcome::Checked => 0,
            RunOutcome::Rejected(_) => 2,
        }
    }
}

/// High-level entry point used by `main.rs`; writes to stdout.
pub fn run(args: CliArgs) -> Result<RunOutcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(&args, &mut out)
}

/// Load config and request, schedule, and render the result into `out`.
///
/// I/O and parse failures come back as `Err`; a rejected request is a
/// normal [`RunOutcome::Rejected`] with the error body already written.
pub fn run_with_writer<W: Write>(args: &CliArgs, out: &mut W) -> Result<RunOutcome> {
    let cfg = load_or_default(args.config.as_deref().map(Path::new))?;

    let format = args.format.unwrap_or(cfg.output.format);
    let explain = args.explain || cfg.output.explain;
    debug!(?format, explain, max_tasks = cfg.scheduler.max_tasks, "effective settings");

    let request = load_request_from_path(&args.input)?.normalized();
    info!(input = %args.input, tasks = request.tasks.len(), "scheduling request loaded");

    let scheduler = Scheduler::new(cfg.limits());

    let outcome = match scheduler.schedule_with_trace(&request.tasks) {
        Ok(schedule) if args.check => {
            report::write_check(out, format, &schedule)?;
            RunOutcome::Checked
        }
        Ok(schedule) => {
            report::write_schedule(out, format, explain, &schedule)?;
            RunOutcome::Scheduled
        }
        Err(err) => {
            report::write_error(out, format, &err)?;
            RunOutcome::Rejected(err)
        }
    };

    out.flush()?;
    Ok(outcome)
}
