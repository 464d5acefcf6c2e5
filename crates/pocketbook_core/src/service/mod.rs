//! Entity use-case services.
//!
//! # Responsibility
//! - Wrap one `RecordStore` per entity with entity-specific operations.
//! - Open all three collections from one `StoreConfig`.
//!
//! # Invariants
//! - Services never bypass the store's stage-then-commit persistence.

use crate::config::StoreConfig;
use crate::store::{StoreError, StoreResult};

pub mod contact_service;
pub mod note_service;
pub mod task_service;

use contact_service::ContactService;
use note_service::NoteService;
use task_service::TaskService;

/// The three collections of one data directory.
pub struct Pocketbook {
    pub notes: NoteService,
    pub tasks: TaskService,
    pub contacts: ContactService,
}

impl Pocketbook {
    /// Creates the data directory if needed and opens every collection.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        std::fs::create_dir_all(config.data_dir())
            .map_err(|err| StoreError::io(config.data_dir(), err))?;
        Ok(Self {
            notes: NoteService::open(config.notes_path())?,
            tasks: TaskService::open(config.tasks_path())?,
            contacts: ContactService::open(config.contacts_path())?,
        })
    }
}
