//! Note use-case service.
//!
//! # Invariants
//! - Every edit refreshes `timestamp`, even when no field changes.
//! - Search matches title or content case-insensitively.

use crate::model::note::{current_timestamp, Note, NoteDraft, NotePatch};
use crate::model::record::RecordId;
use crate::store::{ExportOutcome, RecordStore, StoreResult};
use std::path::{Path, PathBuf};

pub struct NoteService {
    store: RecordStore<Note>,
}

impl NoteService {
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Ok(Self::new(RecordStore::open(path)?))
    }

    pub fn new(store: RecordStore<Note>) -> Self {
        Self { store }
    }

    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        self.store.add(NoteDraft::new(title, content))
    }

    pub fn list_notes(&self) -> &[Note] {
        self.store.records()
    }

    pub fn get_note(&self, id: RecordId) -> Option<&Note> {
        self.store.find_by_id(id)
    }

    pub fn search_notes(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.store.filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
    }

    pub fn edit_note(&mut self, id: RecordId, patch: NotePatch) -> StoreResult<Note> {
        let timestamp = current_timestamp();
        self.store.update(id, |note| note.apply(patch, timestamp))
    }

    pub fn delete_note(&mut self, id: RecordId) -> StoreResult<Note> {
        self.store.delete(id)
    }

    pub fn export_csv(&self, path: impl AsRef<Path>) -> StoreResult<ExportOutcome> {
        self.store.export_csv(path)
    }

    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        self.store.import_csv(path)
    }
}
