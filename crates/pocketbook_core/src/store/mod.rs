//! Record persistence: backing files and the generic store.
//!
//! # Responsibility
//! - Own the JSON document format shared by all collections.
//! - Surface semantic errors (`NotFound`, `FileNotFound`) next to I/O and
//!   format failures.
//!
//! # Invariants
//! - A missing ID is reported as `NotFound`, never masked.
//! - A corrupt backing file is a `Format` error at load time.
//! - Running out of IDs is an error, never a wrap-around.

use crate::model::record::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod file;
mod record_store;

pub use file::{read_document, write_document, CollectionDocument};
pub use record_store::{ExportOutcome, RecordStore};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Operation referenced an ID that is not in the collection.
    NotFound(RecordId),
    /// Backing file is not a valid collection document.
    Format { path: PathBuf, message: String },
    /// Read or write failure on a backing or CSV file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// CSV import source does not exist.
    FileNotFound(PathBuf),
    /// CSV encoding or decoding failure.
    Csv { path: PathBuf, source: csv::Error },
    /// Every representable ID has been handed out.
    IdsExhausted,
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Format { .. } => "format_error",
            Self::Io { .. } => "io_error",
            Self::FileNotFound(_) => "file_not_found",
            Self::Csv { .. } => "csv_error",
            Self::IdsExhausted => "ids_exhausted",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Format { path, message } => {
                write!(f, "invalid data file `{}`: {message}", path.display())
            }
            Self::Io { path, source } => write!(f, "I/O error on `{}`: {source}", path.display()),
            Self::FileNotFound(path) => write!(f, "file not found: `{}`", path.display()),
            Self::Csv { path, source } => write!(f, "CSV error in `{}`: {source}", path.display()),
            Self::IdsExhausted => f.write_str("no record IDs left to assign"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::NotFound(_)
            | Self::Format { .. }
            | Self::FileNotFound(_)
            | Self::IdsExhausted => None,
        }
    }
}
