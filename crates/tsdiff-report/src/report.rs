//! Change report rendering.
//!
//! The report is one delimited text file with three fixed sections, in
//! order: added rows, removed rows, updated fields. Every section keeps
//! its title and column header even when it has no data rows, so a
//! reader can always tell "nothing changed" from "section absent".

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;
use tsdiff_csv::format_record;
use tsdiff_diff::TableDiff;
use tsdiff_types::{Row, Table, KEY_COLUMNS};

use crate::error::ReportResult;

/// Title of the added-rows section.
pub const ADDED_TITLE: &str = "Added Rows";

/// Title of the removed-rows section.
pub const REMOVED_TITLE: &str = "Removed Rows";

/// Title of the updated-fields section.
pub const UPDATED_TITLE: &str = "Updated Rows";

/// Column header of the updated-fields section, after the key columns.
const UPDATED_COLUMNS: [&str; 3] = ["Field", "Old Value", "New Value"];

/// Renders the complete change report as delimited text.
///
/// Added rows carry the current snapshot's columns, removed rows the
/// previous snapshot's, and updated fields the fixed
/// `Field,Old Value,New Value` layout. Every record starts with the two
/// key columns. Row order is the diff's order, which follows the source
/// snapshots.
pub fn render_report(
    diff: &TableDiff,
    current: &Table,
    previous: &Table,
    delimiter: char,
) -> String {
    let mut out = String::new();

    push_row_section(&mut out, ADDED_TITLE, current.columns(), &diff.added, delimiter);
    out.push('\n');
    push_row_section(&mut out, REMOVED_TITLE, previous.columns(), &diff.removed, delimiter);
    out.push('\n');

    out.push_str(UPDATED_TITLE);
    out.push('\n');
    let mut header: Vec<&str> = KEY_COLUMNS.to_vec();
    header.extend(UPDATED_COLUMNS);
    out.push_str(&format_record(&header, delimiter));
    out.push('\n');
    for change in &diff.updated {
        let fields = [
            change.key.division.clone(),
            change.key.course_section.clone(),
            change.field.clone(),
            change.old.to_string(),
            change.new.to_string(),
        ];
        out.push_str(&format_record(&fields, delimiter));
        out.push('\n');
    }

    out
}

/// Appends one whole-row section: title, key-plus-value column header,
/// then one record per row.
fn push_row_section(
    out: &mut String,
    title: &str,
    columns: &[String],
    rows: &[Row],
    delimiter: char,
) {
    out.push_str(title);
    out.push('\n');

    let mut header: Vec<&str> = KEY_COLUMNS.to_vec();
    header.extend(columns.iter().map(String::as_str));
    out.push_str(&format_record(&header, delimiter));
    out.push('\n');

    for row in rows {
        let mut fields = vec![row.key.division.clone(), row.key.course_section.clone()];
        fields.extend(row.values.iter().map(|value| value.to_string()));
        out.push_str(&format_record(&fields, delimiter));
        out.push('\n');
    }
}

/// Renders the report and writes it to `path`, replacing any previous
/// report.
pub fn write_report(
    path: &Path,
    diff: &TableDiff,
    current: &Table,
    previous: &Table,
    delimiter: char,
) -> ReportResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_report(diff, current, previous, delimiter).as_bytes())?;
    writer.flush()?;
    debug!(
        path = %path.display(),
        added = diff.added_count(),
        removed = diff.removed_count(),
        updated = diff.updated_count(),
        "report written"
    );
    Ok(())
}
