//! Snapshot parsing: delimited text into a keyed [`Table`].

use std::fs;
use std::path::Path;

use tracing::debug;
use tsdiff_types::{
    CellValue, Row, RowKey, Table, TableError, COURSE_SECTION_COLUMN, DIVISION_COLUMN,
};

use crate::error::{CsvError, CsvResult};
use crate::record::parse_record;

/// Parses delimited snapshot text into a keyed table.
///
/// The first non-empty line is the header, which must contain both key
/// columns. Key fields are peeled off into the row key; the remaining
/// header names become the table's value columns. Data rows shorter than
/// the header are padded with missing cells, rows wider than the header
/// are an error, and so are duplicate keys.
pub fn parse_table(text: &str, delimiter: char) -> CsvResult<Table> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_idx, header_line)) = lines.next() else {
        // An empty snapshot has no header, so no key columns either.
        return Err(TableError::MissingKeyColumn(DIVISION_COLUMN.to_string()).into());
    };
    let header = parse_record(header_line, delimiter, header_idx + 1)?;

    let division_idx = header
        .iter()
        .position(|name| name == DIVISION_COLUMN)
        .ok_or_else(|| TableError::MissingKeyColumn(DIVISION_COLUMN.to_string()))?;
    let section_idx = header
        .iter()
        .position(|name| name == COURSE_SECTION_COLUMN)
        .ok_or_else(|| TableError::MissingKeyColumn(COURSE_SECTION_COLUMN.to_string()))?;

    // Value columns are the header minus the key columns, in header order.
    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != division_idx && *idx != section_idx)
        .map(|(_, name)| name.clone())
        .collect();

    let mut rows = Vec::new();
    for (line_idx, line) in lines {
        let line_no = line_idx + 1;
        let mut fields = parse_record(line, delimiter, line_no)?;
        if fields.len() > header.len() {
            return Err(CsvError::TooManyFields {
                line: line_no,
                expected: header.len(),
                actual: fields.len(),
            });
        }
        // Pad short rows so every row matches the header width.
        fields.resize(header.len(), String::new());

        let key = RowKey::new(fields[division_idx].clone(), fields[section_idx].clone());
        let values = fields
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != division_idx && *idx != section_idx)
            .map(|(_, raw)| CellValue::parse(raw))
            .collect();
        rows.push(Row::new(key, values));
    }

    let table = Table::new(columns, rows)?;
    debug!(
        rows = table.len(),
        columns = table.columns().len(),
        "parsed snapshot"
    );
    Ok(table)
}

/// Reads and parses the snapshot at `path`.
///
/// A missing file is reported as [`CsvError::SourceMissing`] so callers
/// can tell it apart from other I/O failures.
pub fn load_table(path: &Path, delimiter: char) -> CsvResult<Table> {
    if !path.exists() {
        return Err(CsvError::SourceMissing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    parse_table(&text, delimiter)
}
