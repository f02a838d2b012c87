//! Snapshot-level diff: compare two keyed tables and produce a change set.
//!
//! Rows are categorized by the key partition. Field-level changes are
//! found by walking each common row across the aligned columns (those
//! present in both snapshots) and comparing cell values. The result is a
//! flat change set: whole rows for additions and removals, one record per
//! differing (key, field) pair for updates.

use tsdiff_types::{CellValue, Row, RowKey, Table};

use crate::partition::partition_keys;

/// One field-level difference on a row present in both snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldChange {
    /// Composite key of the changed row.
    pub key: RowKey,
    /// Name of the changed column.
    pub field: String,
    /// Value in the previous snapshot.
    pub old: CellValue,
    /// Value in the current snapshot.
    pub new: CellValue,
}

/// The complete change set between two snapshots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableDiff {
    /// Rows present only in the current snapshot, carrying all of its
    /// columns, in current row order.
    pub added: Vec<Row>,
    /// Rows present only in the previous snapshot, carrying all of its
    /// columns, in previous row order.
    pub removed: Vec<Row>,
    /// Field-level changes on rows present in both snapshots.
    pub updated: Vec<FieldChange>,
}

impl TableDiff {
    /// Creates an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes of any kind.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }

    /// Total number of change records.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.updated.len()
    }

    /// Number of added rows.
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    /// Number of removed rows.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Number of field-level updates.
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }
}

/// Value columns present in both snapshots, in current column order.
///
/// Columns unique to one side are invisible to change detection, but they
/// still appear in full on added and removed rows.
pub fn aligned_columns(current: &Table, previous: &Table) -> Vec<String> {
    current
        .columns()
        .iter()
        .filter(|name| previous.column_index(name).is_some())
        .cloned()
        .collect()
}

/// Compares two snapshots and produces their change set.
///
/// Neither table is mutated; the diff borrows both and clones only what
/// it reports. Output order is deterministic: added rows follow current
/// row order, removed rows follow previous row order, and updates walk
/// common keys in current row order and aligned columns in current
/// column order.
pub fn diff_tables(current: &Table, previous: &Table) -> TableDiff {
    let partition = partition_keys(current, previous);

    // Resolve each aligned column to its position on both sides once,
    // before the row walk.
    let aligned: Vec<(String, usize, usize)> = aligned_columns(current, previous)
        .into_iter()
        .filter_map(|name| {
            let cur = current.column_index(&name)?;
            let prev = previous.column_index(&name)?;
            Some((name, cur, prev))
        })
        .collect();

    let mut diff = TableDiff::new();

    for key in &partition.added {
        if let Some(row) = current.get(key) {
            diff.added.push(row.clone());
        }
    }

    for key in &partition.removed {
        if let Some(row) = previous.get(key) {
            diff.removed.push(row.clone());
        }
    }

    for key in &partition.common {
        let (Some(current_row), Some(previous_row)) = (current.get(key), previous.get(key)) else {
            continue;
        };
        for (name, cur_idx, prev_idx) in &aligned {
            let new = &current_row.values[*cur_idx];
            let old = &previous_row.values[*prev_idx];
            if new != old {
                diff.updated.push(FieldChange {
                    key: key.clone(),
                    field: name.clone(),
                    old: old.clone(),
                    new: new.clone(),
                });
            }
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(division: &str, section: &str) -> RowKey {
        RowKey::new(division, section)
    }

    fn cells(raw: &[&str]) -> Vec<CellValue> {
        raw.iter().map(|r| CellValue::parse(r)).collect()
    }

    fn make_table(columns: &[&str], rows: &[((&str, &str), &[&str])]) -> Table {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|((d, s), values)| Row::new(key(d, s), cells(values)))
            .collect();
        Table::new(columns, rows).unwrap()
    }

    // ------------------------------------------------------------------
    // Row categorization
    // ------------------------------------------------------------------

    #[test]
    fn added_row_reported_whole() {
        let previous = make_table(
            &["Instructor", "Hours"],
            &[(("Math", "M101-01"), &["Smith", "3"])],
        );
        let current = make_table(
            &["Instructor", "Hours"],
            &[
                (("Math", "M101-01"), &["Smith", "3"]),
                (("Sci", "S201-01"), &["Jones", "4"]),
            ],
        );

        let diff = diff_tables(&current, &previous);

        assert_eq!(diff.added_count(), 1);
        assert_eq!(diff.removed_count(), 0);
        assert_eq!(diff.updated_count(), 0);
        assert_eq!(diff.added[0].key, key("Sci", "S201-01"));
        assert_eq!(diff.added[0].values, cells(&["Jones", "4"]));
    }

    #[test]
    fn removed_row_reported_whole() {
        let previous = make_table(
            &["Instructor"],
            &[(("Math", "M101-01"), &["Smith"]), (("Sci", "S201-01"), &["Jones"])],
        );
        let current = make_table(&["Instructor"], &[(("Math", "M101-01"), &["Smith"])]);

        let diff = diff_tables(&current, &previous);

        assert_eq!(diff.removed_count(), 1);
        assert_eq!(diff.removed[0].key, key("Sci", "S201-01"));
        assert_eq!(diff.removed[0].values, cells(&["Jones"]));
    }

    #[test]
    fn identical_snapshots_produce_empty_diff() {
        let table = make_table(
            &["Instructor", "Hours"],
            &[
                (("Math", "M101-01"), &["Smith", "3"]),
                (("Sci", "S201-01"), &["Jones", "4"]),
            ],
        );

        let diff = diff_tables(&table, &table);

        assert!(diff.is_empty());
        assert_eq!(diff.len(), 0);
    }

    // ------------------------------------------------------------------
    // Field-level updates
    // ------------------------------------------------------------------

    #[test]
    fn single_field_update() {
        let previous = make_table(
            &["Instructor", "Hours"],
            &[(("Math", "M101-01"), &["Smith", "3"])],
        );
        let current = make_table(
            &["Instructor", "Hours"],
            &[(("Math", "M101-01"), &["Smith", "4"])],
        );

        let diff = diff_tables(&current, &previous);

        assert_eq!(diff.updated_count(), 1);
        let change = &diff.updated[0];
        assert_eq!(change.key, key("Math", "M101-01"));
        assert_eq!(change.field, "Hours");
        assert_eq!(change.old, CellValue::parse("3"));
        assert_eq!(change.new, CellValue::parse("4"));
    }

    #[test]
    fn multiple_fields_produce_one_record_each() {
        let previous = make_table(
            &["Instructor", "Hours", "Room"],
            &[(("Math", "M101-01"), &["Smith", "3", "A1"])],
        );
        let current = make_table(
            &["Instructor", "Hours", "Room"],
            &[(("Math", "M101-01"), &["Lee", "3", "B2"])],
        );

        let diff = diff_tables(&current, &previous);

        assert_eq!(diff.updated_count(), 2);
        assert_eq!(diff.updated[0].field, "Instructor");
        assert_eq!(diff.updated[1].field, "Room");
    }

    #[test]
    fn numeric_values_compared_numerically() {
        let previous = make_table(&["Hours"], &[(("Math", "M101-01"), &["3.0"])]);
        let current = make_table(&["Hours"], &[(("Math", "M101-01"), &["3"])]);

        let diff = diff_tables(&current, &previous);

        assert!(diff.is_empty());
    }

    #[test]
    fn missing_to_present_is_a_change() {
        let previous = make_table(&["Room"], &[(("Math", "M101-01"), &[""])]);
        let current = make_table(&["Room"], &[(("Math", "M101-01"), &["A1"])]);

        let diff = diff_tables(&current, &previous);

        assert_eq!(diff.updated_count(), 1);
        assert_eq!(diff.updated[0].old, CellValue::Missing);
        assert_eq!(diff.updated[0].new, CellValue::parse("A1"));
    }

    #[test]
    fn missing_on_both_sides_is_not_a_change() {
        let previous = make_table(&["Room"], &[(("Math", "M101-01"), &[""])]);
        let current = make_table(&["Room"], &[(("Math", "M101-01"), &[""])]);

        let diff = diff_tables(&current, &previous);

        assert!(diff.is_empty());
    }

    #[test]
    fn wide_integer_change_is_detected() {
        // Adjacent integers above 2^53 collide as f64; the update must
        // still be reported.
        let previous = make_table(&["Id"], &[(("Math", "M101-01"), &["9007199254740992"])]);
        let current = make_table(&["Id"], &[(("Math", "M101-01"), &["9007199254740993"])]);

        let diff = diff_tables(&current, &previous);

        assert_eq!(diff.updated_count(), 1);
        assert_eq!(diff.updated[0].field, "Id");
    }

    // ------------------------------------------------------------------
    // Column alignment
    // ------------------------------------------------------------------

    #[test]
    fn aligned_columns_intersection_in_current_order() {
        let current = make_table(
            &["Hours", "Instructor", "Status"],
            &[(("Math", "M101-01"), &["3", "Smith", "open"])],
        );
        let previous = make_table(
            &["Instructor", "Hours", "Room"],
            &[(("Math", "M101-01"), &["Smith", "3", "A1"])],
        );

        let aligned = aligned_columns(&current, &previous);

        assert_eq!(aligned, vec!["Hours".to_string(), "Instructor".to_string()]);
    }

    #[test]
    fn columns_unique_to_one_side_never_produce_updates() {
        // "Status" exists only in current, "Room" only in previous. The
        // shared columns agree, so nothing is reported.
        let current = make_table(
            &["Instructor", "Status"],
            &[(("Math", "M101-01"), &["Smith", "open"])],
        );
        let previous = make_table(
            &["Instructor", "Room"],
            &[(("Math", "M101-01"), &["Smith", "A1"])],
        );

        let diff = diff_tables(&current, &previous);

        assert!(diff.is_empty());
    }

    #[test]
    fn updates_compare_by_column_name_not_position() {
        // Same columns, different order on each side.
        let current = make_table(
            &["Hours", "Instructor"],
            &[(("Math", "M101-01"), &["3", "Smith"])],
        );
        let previous = make_table(
            &["Instructor", "Hours"],
            &[(("Math", "M101-01"), &["Smith", "3"])],
        );

        let diff = diff_tables(&current, &previous);

        assert!(diff.is_empty());
    }

    #[test]
    fn added_rows_keep_columns_missing_from_previous() {
        let current = make_table(
            &["Instructor", "Status"],
            &[(("Sci", "S201-01"), &["Jones", "open"])],
        );
        let previous = make_table(&["Instructor"], &[]);

        let diff = diff_tables(&current, &previous);

        assert_eq!(diff.added_count(), 1);
        assert_eq!(diff.added[0].values, cells(&["Jones", "open"]));
        assert_eq!(diff.removed_count(), 0);
        assert_eq!(diff.updated_count(), 0);
    }

    // ------------------------------------------------------------------
    // Ordering and structural properties
    // ------------------------------------------------------------------

    #[test]
    fn output_order_is_deterministic() {
        let current = make_table(
            &["Hours"],
            &[
                (("B", "2"), &["1"]),
                (("A", "1"), &["9"]),
                (("C", "3"), &["1"]),
            ],
        );
        let previous = make_table(
            &["Hours"],
            &[
                (("D", "4"), &["1"]),
                (("A", "1"), &["1"]),
                (("E", "5"), &["1"]),
            ],
        );

        let diff = diff_tables(&current, &previous);

        // Added rows in current row order.
        let added: Vec<&RowKey> = diff.added.iter().map(|r| &r.key).collect();
        assert_eq!(added, vec![&key("B", "2"), &key("C", "3")]);
        // Removed rows in previous row order.
        let removed: Vec<&RowKey> = diff.removed.iter().map(|r| &r.key).collect();
        assert_eq!(removed, vec![&key("D", "4"), &key("E", "5")]);
        // The common row changed.
        assert_eq!(diff.updated_count(), 1);
        assert_eq!(diff.updated[0].key, key("A", "1"));
    }

    #[test]
    fn every_key_lands_in_exactly_one_category() {
        let current = make_table(
            &["Hours"],
            &[(("A", "1"), &["1"]), (("B", "2"), &["2"])],
        );
        let previous = make_table(
            &["Hours"],
            &[(("B", "2"), &["3"]), (("C", "3"), &["4"])],
        );

        let diff = diff_tables(&current, &previous);

        let added: Vec<&RowKey> = diff.added.iter().map(|r| &r.key).collect();
        let removed: Vec<&RowKey> = diff.removed.iter().map(|r| &r.key).collect();
        let updated: Vec<&RowKey> = diff.updated.iter().map(|c| &c.key).collect();

        assert_eq!(added, vec![&key("A", "1")]);
        assert_eq!(removed, vec![&key("C", "3")]);
        assert_eq!(updated, vec![&key("B", "2")]);
    }

    #[test]
    fn symmetry_of_added_and_removed() {
        let current = make_table(
            &["Hours"],
            &[(("A", "1"), &["1"]), (("B", "2"), &["2"])],
        );
        let previous = make_table(&["Hours"], &[(("C", "3"), &["3"])]);

        let forward = diff_tables(&current, &previous);
        let reverse = diff_tables(&previous, &current);

        assert_eq!(forward.added, reverse.removed);
        assert_eq!(forward.removed, reverse.added);
    }

    #[test]
    fn diff_against_self_is_idempotent() {
        let table = make_table(
            &["Instructor", "Hours"],
            &[(("A", "1"), &["Smith", "3"]), (("B", "2"), &["Jones", ""])],
        );

        assert!(diff_tables(&table, &table).is_empty());
        assert!(diff_tables(&table, &table.clone()).is_empty());
    }
}
