//! Keyed snapshot tables.
//!
//! A [`Table`] holds one snapshot: value columns in source order, rows in
//! source order, and a key index for membership and lookup. The key columns
//! are held apart from the value columns (the composite key is not a value
//! field), which lets report rendering reassemble the full column layout
//! with the key leading. Tables are read-only once built; diffing never
//! mutates a snapshot.

use std::collections::{HashMap, HashSet};

use crate::error::{TableError, TableResult};
use crate::key::RowKey;
use crate::value::CellValue;

/// One timesheet row: its composite key plus the values of the owning
/// table's value columns, in column order.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// The composite key identifying this row across snapshots.
    pub key: RowKey,
    /// Cell values parallel to the owning table's `columns()`.
    pub values: Vec<CellValue>,
}

impl Row {
    /// Create a row from its key and values.
    pub fn new(key: RowKey, values: Vec<CellValue>) -> Self {
        Self { key, values }
    }
}

/// One snapshot of the timesheet, keyed by [`RowKey`].
#[derive(Clone, Debug)]
pub struct Table {
    /// Value column names in source order (key columns excluded).
    columns: Vec<String>,
    /// Rows in source order.
    rows: Vec<Row>,
    /// Key → position in `rows`.
    index: HashMap<RowKey, usize>,
}

impl Table {
    /// Build a table from value-column names and rows.
    ///
    /// Column names must be unique (cells are addressed by column name),
    /// every row must carry exactly one value per column, and composite
    /// keys must be unique across the table.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> TableResult<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        let mut index = HashMap::with_capacity(rows.len());

        for (position, row) in rows.iter().enumerate() {
            if row.values.len() != columns.len() {
                return Err(TableError::WidthMismatch {
                    key: row.key.clone(),
                    expected: columns.len(),
                    actual: row.values.len(),
                });
            }
            if index.insert(row.key.clone(), position).is_some() {
                return Err(TableError::DuplicateKey(row.key.clone()));
            }
        }

        Ok(Self {
            columns,
            rows,
            index,
        })
    }

    /// An empty table with the given value columns.
    ///
    /// Column names must be unique, as in [`Table::new`].
    pub fn empty(columns: Vec<String>) -> TableResult<Self> {
        Self::new(columns, Vec::new())
    }

    /// Value column names in source order (key columns excluded).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row by key.
    pub fn get(&self, key: &RowKey) -> Option<&Row> {
        self.index.get(key).map(|&position| &self.rows[position])
    }

    /// Returns `true` if a row with this key exists.
    pub fn contains_key(&self, key: &RowKey) -> bool {
        self.index.contains_key(key)
    }

    /// Row keys in row (source) order.
    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.rows.iter().map(|row| &row.key)
    }

    /// Position of a value column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// The value of one cell, by key and column name.
    pub fn value(&self, key: &RowKey, column: &str) -> Option<&CellValue> {
        let row = self.get(key)?;
        row.values.get(self.column_index(column)?)
    }
}
