//! CSV import/export adapters for record collections.
//!
//! # Responsibility
//! - Write a header row plus one row per record in list order.
//! - Read rows back as drafts, matching columns by header name.
//!
//! # Invariants
//! - Export column order is exactly `Record::CSV_HEADERS`.
//! - Import tolerates reordered, unknown, and missing columns.
//! - Cell values are kept verbatim; only header names are trimmed.

use crate::model::record::Record;
use crate::store::{StoreError, StoreResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// One imported CSV row with by-name column lookup.
pub struct CsvRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a csv::StringRecord,
}

impl<'a> CsvRow<'a> {
    /// Returns the non-empty cell under `column`, if the column exists.
    ///
    /// Header lookup ignores case and surrounding whitespace.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.columns
            .get(&normalize_header(column))
            .and_then(|index| self.record.get(*index))
            .filter(|value| !value.is_empty())
    }

    /// Returns the cell under `column`, or an empty string when absent.
    pub fn text(&self, column: &str) -> String {
        self.get(column).unwrap_or_default().to_string()
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Writes `records` as CSV to `writer` and returns the row count.
pub fn write_records<T: Record, W: Write>(writer: W, records: &[T]) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(T::CSV_HEADERS)?;
    for record in records {
        csv_writer.write_record(record.csv_row())?;
    }
    csv_writer.flush()?;
    Ok(records.len())
}

/// Reads every data row of `reader` into drafts for `T`.
pub fn read_drafts<T: Record, R: Read>(reader: R) -> Result<Vec<T::Draft>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, header)| (normalize_header(header.trim_start_matches('\u{feff}')), index))
        .collect::<HashMap<_, _>>();

    let mut drafts = Vec::new();
    for row in csv_reader.records() {
        let record = row?;
        drafts.push(T::draft_from_csv(&CsvRow {
            columns: &columns,
            record: &record,
        }));
    }
    Ok(drafts)
}

/// Creates `path` and writes `records` into it.
pub fn export_to_path<T: Record>(path: &Path, records: &[T]) -> StoreResult<usize> {
    let file = File::create(path).map_err(|err| StoreError::io(path, err))?;
    write_records(file, records).map_err(|err| StoreError::csv(path, err))
}

/// Opens `path` and reads its rows into drafts.
///
/// # Errors
/// - `StoreError::FileNotFound` when `path` does not exist.
pub fn import_from_path<T: Record>(path: &Path) -> StoreResult<Vec<T::Draft>> {
    if !path.exists() {
        return Err(StoreError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|err| StoreError::io(path, err))?;
    read_drafts::<T, _>(file).map_err(|err| StoreError::csv(path, err))
}

#[cfg(test)]
mod tests {
    use super::{read_drafts, write_records};
    use crate::model::contact::{Contact, ContactDraft};
    use crate::model::task::{Priority, Task};

    #[test]
    fn export_writes_fixed_header_and_status_labels() {
        let tasks = vec![Task {
            id: 3,
            title: "Buy milk".to_string(),
            description: "2 liters, \"fresh\"".to_string(),
            done: true,
            priority: Priority::High,
            due_date: None,
        }];
        let mut buffer = Vec::new();
        let written = write_records(&mut buffer, &tasks).unwrap();
        assert_eq!(written, 1);

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Name,Description,Status,Priority,Due Date")
        );
        assert_eq!(
            lines.next(),
            Some("3,Buy milk,\"2 liters, \"\"fresh\"\"\",Done,High,")
        );
    }

    #[test]
    fn import_matches_columns_by_header_name() {
        let source = "E-mail,name , Phone,Extra\nbo@example.com,Bo,555-1,x\n";
        let drafts = read_drafts::<Contact, _>(source.as_bytes()).unwrap();
        assert_eq!(
            drafts,
            vec![ContactDraft::new("Bo", "555-1", "bo@example.com")]
        );
    }

    #[test]
    fn import_tolerates_short_rows_and_byte_order_mark() {
        let source = "\u{feff}ID,Name,Phone,E-mail\n9,Cy\n";
        let drafts = read_drafts::<Contact, _>(source.as_bytes()).unwrap();
        assert_eq!(drafts, vec![ContactDraft::new("Cy", "", "")]);
    }
}
