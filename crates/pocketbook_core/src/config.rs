//! Store location configuration.
//!
//! # Responsibility
//! - Name the directory that holds the three collection files.
//! - Derive each backing-file path from that directory.
//!
//! # Invariants
//! - Paths are always passed explicitly; there is no process-wide default.

use std::path::{Path, PathBuf};

pub const NOTES_FILE_NAME: &str = "notes.json";
pub const TASKS_FILE_NAME: &str = "tasks.json";
pub const CONTACTS_FILE_NAME: &str = "contacts.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILE_NAME)
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join(TASKS_FILE_NAME)
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.data_dir.join(CONTACTS_FILE_NAME)
    }
}
