//! Core record-keeping logic for Pocketbook.
//! Owns the note/task/contact models, their file-backed stores, and CSV
//! import/export.

pub mod config;
pub mod csv_io;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactDraft, ContactPatch};
pub use model::note::{Note, NoteDraft, NotePatch, NOTE_TIMESTAMP_FORMAT};
pub use model::record::{Record, RecordId};
pub use model::task::{Priority, Task, TaskDraft, TaskFilter, TaskPatch};
pub use service::contact_service::ContactService;
pub use service::note_service::NoteService;
pub use service::task_service::TaskService;
pub use service::Pocketbook;
pub use store::{ExportOutcome, RecordStore, StoreError, StoreResult};
