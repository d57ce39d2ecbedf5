// src/request/model.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ScheduleError;

/// A scheduling request as sent by the task-management service.
///
/// ```json
/// {
///   "tasks": [
///     { "title": "A", "estimatedHours": 5, "dueDate": "2024-01-10", "dependencies": [] },
///     { "title": "B", "estimatedHours": 3, "dueDate": "2024-01-05", "dependencies": ["A"] }
///   ]
/// }
/// ```
///
/// A missing or `null` task list is the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<TaskSpec>,
}

impl ScheduleRequest {
    pub fn new(tasks: Vec<TaskSpec>) -> Self {
        Self { tasks }
    }

    /// Drop blank dependency entries.
    ///
    /// Task records coming out of forms often carry `""` placeholders in
    /// their dependency list; those are not references to anything. Every
    /// other entry is kept verbatim, since titles are matched exactly.
    pub fn normalized(mut self) -> Self {
        for task in self.tasks.iter_mut() {
            task.dependencies.retain(|dep| !dep.trim().is_empty());
        }
        self
    }
}

/// One task descriptor. `title` is the join key for `dependencies`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub title: String,

    pub estimated_hours: u32,

    #[serde(
        serialize_with = "serialize_due_date",
        deserialize_with = "deserialize_due_date"
    )]
    pub due_date: DateTime<Utc>,

    /// Titles of tasks that must be scheduled before this one.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskSpec {
    pub fn new(title: impl Into<String>, estimated_hours: u32, due_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            estimated_hours,
            due_date,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(deps.into_iter().map(Into::into));
        self
    }
}

/// Successful response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub recommended_order: Vec<String>,
}

/// Failure response body: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&ScheduleError> for ErrorResponse {
    fn from(err: &ScheduleError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Parse a due date.
///
/// Accepted forms, most specific first:
/// - RFC 3339 (`2024-01-10T09:30:00Z`, `2024-01-10T09:30:00+02:00`)
/// - naive timestamp, taken as UTC (`2024-01-10T09:30:00`, `2024-01-10 09:30:00`)
/// - bare date, midnight UTC (`2024-01-10`)
pub fn parse_due_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn serialize_due_date<S>(due: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&due.to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_due_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid dueDate '{raw}' (expected RFC 3339 timestamp or YYYY-MM-DD)"
        ))
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TaskSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TaskSpec>>::deserialize(deserializer)?.unwrap_or_default())
}
