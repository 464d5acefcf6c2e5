//! Contact use-case service.

use crate::model::contact::{Contact, ContactDraft, ContactPatch};
use crate::model::record::RecordId;
use crate::store::{ExportOutcome, RecordStore, StoreResult};
use std::path::{Path, PathBuf};

pub struct ContactService {
    store: RecordStore<Contact>,
}

impl ContactService {
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Ok(Self::new(RecordStore::open(path)?))
    }

    pub fn new(store: RecordStore<Contact>) -> Self {
        Self { store }
    }

    pub fn add_contact(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        mail: impl Into<String>,
    ) -> StoreResult<Contact> {
        self.store.add(ContactDraft::new(name, phone, mail))
    }

    pub fn list_contacts(&self) -> &[Contact] {
        self.store.records()
    }

    pub fn get_contact(&self, id: RecordId) -> Option<&Contact> {
        self.store.find_by_id(id)
    }

    /// Case-insensitive name match or exact phone substring match.
    pub fn search_contacts(&self, query: &str) -> Vec<&Contact> {
        self.store.filter(|contact| contact.matches_search(query))
    }

    pub fn edit_contact(&mut self, id: RecordId, patch: ContactPatch) -> StoreResult<Contact> {
        self.store.update(id, |contact| contact.apply(patch))
    }

    pub fn delete_contact(&mut self, id: RecordId) -> StoreResult<Contact> {
        self.store.delete(id)
    }

    pub fn export_csv(&self, path: impl AsRef<Path>) -> StoreResult<ExportOutcome> {
        self.store.export_csv(path)
    }

    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        self.store.import_csv(path)
    }
}
