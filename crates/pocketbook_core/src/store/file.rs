//! JSON backing-file codec.
//!
//! # Responsibility
//! - Read and write `{"<collection>": [...], "next_id": n}` documents.
//! - Replace the target file atomically so a failed write keeps the old one.
//!
//! # Invariants
//! - Output is pretty-printed with 4-space indentation and raw UTF-8.
//! - `next_id` is optional on read for files written without it.

use super::{StoreError, StoreResult};
use crate::model::record::{Record, RecordId};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const NEXT_ID_KEY: &str = "next_id";

/// Decoded contents of one backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDocument<T> {
    pub records: Vec<T>,
    /// ID high-water mark persisted by this crate, if present.
    pub next_id: Option<RecordId>,
}

/// Reads and decodes the backing file at `path`.
///
/// # Errors
/// - `StoreError::Io` when the file cannot be read.
/// - `StoreError::Format` when the JSON is invalid, the collection key is
///   missing, or a record lacks a required field.
pub fn read_document<T: Record>(path: &Path) -> StoreResult<CollectionDocument<T>> {
    let bytes = std::fs::read(path).map_err(|err| StoreError::io(path, err))?;
    let value: Value =
        serde_json::from_slice(&bytes).map_err(|err| StoreError::format(path, err.to_string()))?;

    let Value::Object(mut root) = value else {
        return Err(StoreError::format(path, "top-level value must be an object"));
    };

    let records_value = root.remove(T::COLLECTION).ok_or_else(|| {
        StoreError::format(path, format!("missing `{}` collection", T::COLLECTION))
    })?;
    let records: Vec<T> = serde_json::from_value(records_value)
        .map_err(|err| StoreError::format(path, format!("{}: {err}", T::COLLECTION)))?;

    let next_id = match root.get(NEXT_ID_KEY) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_u64().ok_or_else(|| {
            StoreError::format(path, format!("`{NEXT_ID_KEY}` must be a positive integer"))
        })?),
    };

    Ok(CollectionDocument { records, next_id })
}

/// Encodes `records` and replaces the backing file at `path`.
///
/// The document is written to a temporary file in the same directory and
/// renamed over `path`.
pub fn write_document<T: Record>(
    path: &Path,
    records: &[T],
    next_id: RecordId,
) -> StoreResult<()> {
    let mut root = Map::new();
    root.insert(
        T::COLLECTION.to_string(),
        serde_json::to_value(records).map_err(|err| StoreError::format(path, err.to_string()))?,
    );
    root.insert(NEXT_ID_KEY.to_string(), Value::from(next_id));

    let mut bytes = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"    "));
    Value::Object(root)
        .serialize(&mut serializer)
        .map_err(|err| StoreError::format(path, err.to_string()))?;
    bytes.push(b'\n');

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(parent).map_err(|err| StoreError::io(path, err))?;
    staged
        .write_all(&bytes)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|err| StoreError::io(path, err))?;
    staged
        .persist(path)
        .map_err(|err| StoreError::io(path, err.error))?;
    Ok(())
}
