#![allow(dead_code)]

use chrono::{DateTime, Utc};
use taskwave::config::{ConfigFile, OutputSection, RawConfigFile, SchedulerSection};
use taskwave::request::model::parse_due_date;
use taskwave::request::{ScheduleRequest, TaskSpec};
use taskwave::types::OutputFormat;

/// Parse a due date in any accepted request form; panics on bad input.
pub fn due(s: &str) -> DateTime<Utc> {
    parse_due_date(s).unwrap_or_else(|| panic!("bad test due date: {s}"))
}

/// Builder for `TaskSpec` with test-friendly defaults
/// (1 hour, due 2024-01-01, no dependencies).
pub struct TaskSpecBuilder {
    task: TaskSpec,
}

impl TaskSpecBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: TaskSpec::new(title, 1, due("2024-01-01")),
        }
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.task.due_date = due(date);
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn build(self) -> TaskSpec {
        self.task
    }
}

/// Builder for an ordered task list / `ScheduleRequest`.
#[derive(Default)]
pub struct RequestBuilder {
    tasks: Vec<TaskSpec>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, task: TaskSpec) -> Self {
        self.tasks.push(task);
        self
    }

    /// Shorthand for a task with a due date, hours and dependencies.
    pub fn task(self, title: &str, due_date: &str, hours: u32, deps: &[&str]) -> Self {
        let mut builder = TaskSpecBuilder::new(title).due(due_date).hours(hours);
        for dep in deps {
            builder = builder.after(dep);
        }
        self.with_task(builder.build())
    }

    pub fn tasks(self) -> Vec<TaskSpec> {
        self.tasks
    }

    pub fn build(self) -> ScheduleRequest {
        ScheduleRequest::new(self.tasks)
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                scheduler: SchedulerSection::default(),
                output: OutputSection::default(),
            },
        }
    }

    pub fn max_tasks(mut self, max: usize) -> Self {
        self.config.scheduler.max_tasks = max;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn explain(mut self, val: bool) -> Self {
        self.config.output.explain = val;
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
