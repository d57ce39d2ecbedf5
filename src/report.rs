// src/report.rs

//! Rendering of schedules and rejections to stdout.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::dag::Schedule;
use crate::errors::ScheduleError;
use crate::request::{ErrorResponse, ScheduleResponse};
use crate::types::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExplainedResponse<'a> {
    recommended_order: &'a [String],
    waves: &'a [Vec<String>],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckSummary {
    valid: bool,
    tasks: usize,
    dependencies: usize,
    waves: usize,
}

pub fn write_schedule<W: Write>(
    out: &mut W,
    format: OutputFormat,
    explain: bool,
    schedule: &Schedule,
) -> Result<()> {
    match (format, explain) {
        (OutputFormat::Json, false) => {
            let body = ScheduleResponse {
                recommended_order: schedule.order().to_vec(),
            };
            serde_json::to_writer_pretty(&mut *out, &body)?;
            writeln!(out)?;
        }
        (OutputFormat::Json, true) => {
            let body = ExplainedResponse {
                recommended_order: schedule.order(),
                waves: schedule.waves(),
            };
            serde_json::to_writer_pretty(&mut *out, &body)?;
            writeln!(out)?;
        }
        (OutputFormat::Text, false) => {
            for title in schedule.order() {
                writeln!(out, "{title}")?;
            }
        }
        (OutputFormat::Text, true) => {
            let mut position = 1;
            for (i, wave) in schedule.waves().iter().enumerate() {
                writeln!(out, "wave {}:", i + 1)?;
                for title in wave {
                    writeln!(out, "  {position}. {title}")?;
                    position += 1;
                }
            }
        }
    }
    Ok(())
}

pub fn write_check<W: Write>(out: &mut W, format: OutputFormat, schedule: &Schedule) -> Result<()> {
    let summary = CheckSummary {
        valid: true,
        tasks: schedule.len(),
        dependencies: schedule.dependency_count(),
        waves: schedule.waves().len(),
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "request is schedulable")?;
            writeln!(out, "  tasks: {}", summary.tasks)?;
            writeln!(out, "  dependencies: {}", summary.dependencies)?;
            writeln!(out, "  waves: {}", summary.waves)?;
        }
    }
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, format: OutputFormat, err: &ScheduleError) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &ErrorResponse::from(err))?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "error: {err}")?;
        }
    }
    Ok(())
}
