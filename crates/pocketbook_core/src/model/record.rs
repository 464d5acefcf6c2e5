//! Shared record contract.
//!
//! # Responsibility
//! - Describe what `RecordStore<T>` needs from a record type.
//! - Bind each record type to its collection key and CSV layout.
//!
//! # Invariants
//! - `id()` returns the value assigned through `from_draft`.
//! - `csv_row()` yields exactly `CSV_HEADERS.len()` cells in header order.

use crate::csv_io::CsvRow;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Store-assigned integer identifier. Always `>= 1`.
pub type RecordId = u64;

/// A record type that can live in a `RecordStore`.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Field values supplied by callers before an ID exists.
    type Draft;

    /// Key of the record array inside the backing JSON document.
    const COLLECTION: &'static str;

    /// Fixed CSV column order used by export and matched by import.
    const CSV_HEADERS: &'static [&'static str];

    fn id(&self) -> RecordId;

    /// Builds a stored record from a draft and its freshly assigned ID.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Renders one CSV row in `CSV_HEADERS` order.
    fn csv_row(&self) -> Vec<String>;

    /// Reads a draft from an imported CSV row.
    ///
    /// The `ID` column is ignored; missing cells fall back to type defaults.
    fn draft_from_csv(row: &CsvRow<'_>) -> Self::Draft;
}
