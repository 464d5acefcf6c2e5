//! Generic file-backed record store.
//!
//! # Responsibility
//! - Hold one collection in memory, in insertion order.
//! - Assign record IDs and re-persist the whole collection on every mutation.
//! - Provide CSV export/import for the collection.
//!
//! # Invariants
//! - IDs come from a high-water mark and are never handed out twice, even
//!   after the highest record is deleted.
//! - Mutations are staged on a copy and committed only after the backing
//!   file has been written, so memory never runs ahead of disk.
//! - Calls that fail with `NotFound` do not touch the backing file.

use super::file::{read_document, write_document, CollectionDocument};
use super::{StoreError, StoreResult};
use crate::csv_io;
use crate::model::record::{Record, RecordId};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of a CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// File was written with this many data rows.
    Written(usize),
    /// Collection is empty; no file was written.
    Empty,
}

/// In-memory collection synchronized to one JSON file.
pub struct RecordStore<T: Record> {
    path: PathBuf,
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: Record> RecordStore<T> {
    /// Loads the collection at `path`, creating an empty file when absent.
    ///
    /// # Errors
    /// - `StoreError::Format` when the file exists but is not a valid document.
    /// - `StoreError::Io` when the file cannot be created or read.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let started_at = Instant::now();
        info!(
            "event=store_open module=store status=start collection={}",
            T::COLLECTION
        );

        match Self::load(&path) {
            Ok(store) => {
                info!(
                    "event=store_open module=store status=ok collection={} records={} next_id={} duration_ms={}",
                    T::COLLECTION,
                    store.records.len(),
                    store.next_id,
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error collection={} duration_ms={} error_code={} error={}",
                    T::COLLECTION,
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            write_document::<T>(path, &[], 1)?;
        }
        let CollectionDocument { records, next_id } = read_document::<T>(path)?;
        let after_max = match records.iter().map(T::id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                StoreError::format(path, format!("record id {max} is out of range"))
            })?,
            None => 1,
        };
        Ok(Self {
            path: path.to_path_buf(),
            records,
            next_id: next_id.unwrap_or(1).max(after_max),
        })
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// ID that the next `add` will assign.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    /// Appends a record built from `draft` and persists the collection.
    ///
    /// # Errors
    /// - `StoreError::IdsExhausted` when the high-water mark cannot advance;
    ///   nothing is written.
    pub fn add(&mut self, draft: T::Draft) -> StoreResult<T> {
        let next_id = advance(self.next_id)?;
        let record = T::from_draft(self.next_id, draft);
        let mut staged = self.records.clone();
        staged.push(record.clone());
        self.commit(staged, next_id, "record_add")?;
        info!(
            "event=record_add module=store status=ok collection={} id={}",
            T::COLLECTION,
            record.id()
        );
        Ok(record)
    }

    /// Returns the record with `id`, if any.
    pub fn find_by_id(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns records matching `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .iter()
            .filter(|record| predicate(*record))
            .collect()
    }

    /// Applies `change` to the record with `id` and persists the collection.
    ///
    /// Returns the updated record.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record has `id`; nothing is written.
    pub fn update<F>(&mut self, id: RecordId, change: F) -> StoreResult<T>
    where
        F: FnOnce(&mut T),
    {
        let index = self.position(id)?;
        let mut staged = self.records.clone();
        change(&mut staged[index]);
        let updated = staged[index].clone();
        self.commit(staged, self.next_id, "record_update")?;
        info!(
            "event=record_update module=store status=ok collection={} id={id}",
            T::COLLECTION
        );
        Ok(updated)
    }

    /// Removes the record with `id`, persists, and returns the removed record.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record has `id`; nothing is written.
    pub fn delete(&mut self, id: RecordId) -> StoreResult<T> {
        let index = self.position(id)?;
        let mut staged = self.records.clone();
        let removed = staged.remove(index);
        self.commit(staged, self.next_id, "record_delete")?;
        info!(
            "event=record_delete module=store status=ok collection={} id={id}",
            T::COLLECTION
        );
        Ok(removed)
    }

    /// Writes the collection to a CSV file at `path`.
    ///
    /// An empty collection writes nothing and returns `ExportOutcome::Empty`.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> StoreResult<ExportOutcome> {
        if self.records.is_empty() {
            info!(
                "event=csv_export module=store status=skipped collection={} reason=empty",
                T::COLLECTION
            );
            return Ok(ExportOutcome::Empty);
        }

        match csv_io::export_to_path(path.as_ref(), &self.records) {
            Ok(rows) => {
                info!(
                    "event=csv_export module=store status=ok collection={} rows={rows}",
                    T::COLLECTION
                );
                Ok(ExportOutcome::Written(rows))
            }
            Err(err) => {
                error!(
                    "event=csv_export module=store status=error collection={} error_code={} error={}",
                    T::COLLECTION,
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Imports every row of the CSV file at `path` as a new record.
    ///
    /// IDs are freshly assigned; the `ID` column is ignored. The collection is
    /// persisted once after all rows are appended. Returns the imported count.
    ///
    /// # Errors
    /// - `StoreError::FileNotFound` when `path` does not exist.
    /// - `StoreError::Csv` when the file is not readable CSV; nothing is imported.
    /// - `StoreError::IdsExhausted` when the rows need more IDs than remain.
    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let drafts = match csv_io::import_from_path::<T>(path.as_ref()) {
            Ok(drafts) => drafts,
            Err(err) => {
                error!(
                    "event=csv_import module=store status=error collection={} error_code={} error={}",
                    T::COLLECTION,
                    err.code(),
                    err
                );
                return Err(err);
            }
        };

        let count = drafts.len();
        if count > 0 {
            let mut staged = self.records.clone();
            let mut next_id = self.next_id;
            for draft in drafts {
                let id = next_id;
                next_id = advance(next_id)?;
                staged.push(T::from_draft(id, draft));
            }
            self.commit(staged, next_id, "csv_import")?;
        }

        info!(
            "event=csv_import module=store status=ok collection={} rows={count}",
            T::COLLECTION
        );
        Ok(count)
    }

    fn position(&self, id: RecordId) -> StoreResult<usize> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn commit(&mut self, staged: Vec<T>, next_id: RecordId, event: &str) -> StoreResult<()> {
        if let Err(err) = write_document(&self.path, &staged, next_id) {
            error!(
                "event={event} module=store status=error collection={} error_code={} error={}",
                T::COLLECTION,
                err.code(),
                err
            );
            return Err(err);
        }
        self.records = staged;
        self.next_id = next_id;
        Ok(())
    }
}

fn advance(id: RecordId) -> StoreResult<RecordId> {
    id.checked_add(1).ok_or(StoreError::IdsExhausted)
}
