//! Contact record.

use crate::csv_io::CsvRow;
use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub mail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub mail: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        mail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            mail: mail.into(),
        }
    }
}

/// Partial contact update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub mail: Option<String>,
}

impl Contact {
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(mail) = patch.mail {
            self.mail = mail;
        }
    }

    /// Name matches case-insensitively; phone matches as an exact substring.
    pub fn matches_search(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.phone.contains(query)
    }
}

impl Record for Contact {
    type Draft = ContactDraft;

    const COLLECTION: &'static str = "contacts";
    const CSV_HEADERS: &'static [&'static str] = &["ID", "Name", "Phone", "E-mail"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            mail: draft.mail,
        }
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.phone.clone(),
            self.mail.clone(),
        ]
    }

    fn draft_from_csv(row: &CsvRow<'_>) -> ContactDraft {
        ContactDraft {
            name: row.text("Name"),
            phone: row.text("Phone"),
            mail: row.text("E-mail"),
        }
    }
}
