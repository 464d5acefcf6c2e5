//! Note record.
//!
//! # Invariants
//! - `timestamp` uses `DD-MM-YYYY HH:MM:SS` local time.
//! - `timestamp` is set on create and refreshed on every edit.

use crate::csv_io::CsvRow;
use crate::model::record::{Record, RecordId};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// chrono format string for note timestamps.
pub const NOTE_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub timestamp: String,
}

/// Input for creating a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    /// Explicit timestamp, used by CSV import. `None` means "now".
    pub timestamp: Option<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            timestamp: None,
        }
    }
}

/// Partial note update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Note {
    /// Applies a patch and stamps the edit time.
    pub fn apply(&mut self, patch: NotePatch, timestamp: String) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.timestamp = timestamp;
    }
}

/// Returns the current local time formatted for notes.
pub fn current_timestamp() -> String {
    Local::now().format(NOTE_TIMESTAMP_FORMAT).to_string()
}

impl Record for Note {
    type Draft = NoteDraft;

    const COLLECTION: &'static str = "notes";
    const CSV_HEADERS: &'static [&'static str] = &["ID", "Title", "Content", "Date"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            timestamp: draft.timestamp.unwrap_or_else(current_timestamp),
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.content.clone(),
            self.timestamp.clone(),
        ]
    }

    fn draft_from_csv(row: &CsvRow<'_>) -> NoteDraft {
        NoteDraft {
            title: row.text("Title"),
            content: row.text("Content"),
            timestamp: row.get("Date").map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{current_timestamp, Note, NotePatch};
    use chrono::NaiveDateTime;

    #[test]
    fn current_timestamp_matches_note_format() {
        let stamp = current_timestamp();
        NaiveDateTime::parse_from_str(&stamp, super::NOTE_TIMESTAMP_FORMAT)
            .expect("timestamp should parse with note format");
    }

    #[test]
    fn apply_keeps_unset_fields_and_refreshes_timestamp() {
        let mut note = Note {
            id: 1,
            title: "old".to_string(),
            content: "body".to_string(),
            timestamp: "01-01-2024 00:00:00".to_string(),
        };
        note.apply(
            NotePatch {
                title: Some("new".to_string()),
                content: None,
            },
            "02-01-2024 10:00:00".to_string(),
        );
        assert_eq!(note.title, "new");
        assert_eq!(note.content, "body");
        assert_eq!(note.timestamp, "02-01-2024 10:00:00");
    }
}
