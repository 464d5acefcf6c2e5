//! Task record and its closed-set fields.
//!
//! # Responsibility
//! - Define the task shape, priority levels, and status labels.
//! - Keep unrecognized legacy priority text instead of rejecting it.
//!
//! # Invariants
//! - `done` defaults to `false` for new and imported tasks.
//! - `priority` serializes as its display text (`High`, `Medium`, `Low`, or
//!   the legacy value verbatim).
//! - A stored `Priority::Other` never holds text that parses as a known level.
//! - `due_date` follows `DD-MM-YYYY` by convention only and is not validated.

use crate::csv_io::CsvRow;
use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

pub const STATUS_DONE: &str = "Done";
pub const STATUS_NOT_DONE: &str = "Not Done";

/// Task priority level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
    /// Free text written by older versions, kept verbatim.
    Other(String),
}

impl Priority {
    /// Parses priority text; matching is case-insensitive and ignores
    /// surrounding whitespace. Anything else is kept as `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Re-reads `Other` text so a value spelled like a known level becomes
    /// that level. Stored priorities are always normalized, which keeps them
    /// identical after a reload.
    pub fn normalized(self) -> Self {
        match self {
            Self::Other(value) => Self::parse(&value),
            known => known,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Returns the CSV status label for a completion flag.
pub fn status_label(done: bool) -> &'static str {
    if done {
        STATUS_DONE
    } else {
        STATUS_NOT_DONE
    }
}

/// Parses a CSV status label. Only `Done` (any case) counts as done.
pub fn parse_status_label(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(STATUS_DONE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub priority: Priority,
    pub due_date: Option<String>,
}

/// Input for creating a task. New tasks always start not done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<String>,
    /// Completion flag carried by CSV import; interactive adds leave it false.
    pub done: bool,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            due_date,
            done: false,
        }
    }
}

/// Partial task update. `None` keeps the current value.
///
/// `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<String>>,
    pub done: Option<bool>,
}

impl Task {
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority.normalized();
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }
}

/// Completion filter for task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Done,
    NotDone,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Done => task.done,
            Self::NotDone => !task.done,
        }
    }
}

impl Record for Task {
    type Draft = TaskDraft;

    const COLLECTION: &'static str = "tasks";
    const CSV_HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Description",
        "Status",
        "Priority",
        "Due Date",
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            done: draft.done,
            priority: draft.priority.normalized(),
            due_date: draft.due_date,
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            status_label(self.done).to_string(),
            self.priority.to_string(),
            self.due_date.clone().unwrap_or_default(),
        ]
    }

    fn draft_from_csv(row: &CsvRow<'_>) -> TaskDraft {
        TaskDraft {
            title: row.text("Name"),
            description: row.text("Description"),
            priority: row.get("Priority").map(Priority::parse).unwrap_or_default(),
            due_date: row.get("Due Date").map(str::to_string),
            done: row.get("Status").is_some_and(parse_status_label),
        }
    }
}
