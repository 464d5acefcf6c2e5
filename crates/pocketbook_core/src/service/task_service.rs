//! Task use-case service.
//!
//! # Invariants
//! - New tasks start not done.
//! - `mark_done` is idempotent but still re-persists the collection.

use crate::model::record::RecordId;
use crate::model::task::{Priority, Task, TaskDraft, TaskFilter, TaskPatch};
use crate::store::{ExportOutcome, RecordStore, StoreResult};
use std::path::{Path, PathBuf};

pub struct TaskService {
    store: RecordStore<Task>,
}

impl TaskService {
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Ok(Self::new(RecordStore::open(path)?))
    }

    pub fn new(store: RecordStore<Task>) -> Self {
        Self { store }
    }

    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<String>,
    ) -> StoreResult<Task> {
        self.store
            .add(TaskDraft::new(title, description, priority, due_date))
    }

    pub fn list_tasks(&self, filter: TaskFilter) -> Vec<&Task> {
        self.store.filter(|task| filter.matches(task))
    }

    pub fn get_task(&self, id: RecordId) -> Option<&Task> {
        self.store.find_by_id(id)
    }

    pub fn edit_task(&mut self, id: RecordId, patch: TaskPatch) -> StoreResult<Task> {
        self.store.update(id, |task| task.apply(patch))
    }

    pub fn mark_done(&mut self, id: RecordId) -> StoreResult<Task> {
        self.store.update(id, |task| task.done = true)
    }

    pub fn delete_task(&mut self, id: RecordId) -> StoreResult<Task> {
        self.store.delete(id)
    }

    pub fn export_csv(&self, path: impl AsRef<Path>) -> StoreResult<ExportOutcome> {
        self.store.export_csv(path)
    }

    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        self.store.import_csv(path)
    }
}
