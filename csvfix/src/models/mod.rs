//! Domain models for the csvfix pipeline.
//!
//! - [`Table`] - ordered columns and positional rows
//! - [`Column`] - column name and inferred type
//! - [`ColumnType`] - integer, float or text
//! - [`Cell`] - a single typed value, possibly missing

use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// Column Types
// =============================================================================

/// Type inferred for a whole column at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every present value is an integer.
    Integer,
    /// Every present value is a real number.
    Float,
    /// Anything else.
    Text,
}

impl ColumnType {
    /// Integer and float columns are numeric.
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub dtype: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

// =============================================================================
// Cells
// =============================================================================

/// A single value in a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Absent or empty field. Distinct from zero and from `""`.
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// Integers and floats serialize as numbers, text as a string and
/// missing as `null`.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Integer(i) => serializer.serialize_i64(*i),
            Cell::Float(f) => serializer.serialize_f64(*f),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Missing => serializer.serialize_none(),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// Parsed CSV data.
///
/// Rows are stored positionally: `rows[r][c]` is the value of
/// `columns[c]` in row `r`. Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from columns and rows.
    ///
    /// Short rows are padded with [`Cell::Missing`] and long rows truncated,
    /// so the width invariant always holds.
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Missing);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Names of integer and float columns, in column order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.dtype.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Borrowed view of row `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }

    /// Iterate over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(move |cells| Row {
            columns: &self.columns,
            cells,
        })
    }

    /// Cells of one column, top to bottom.
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Mutable access to one column, used by transforms.
    pub(crate) fn column_mut(
        &mut self,
        index: usize,
    ) -> (&mut Column, impl Iterator<Item = &mut Cell> + '_) {
        let column = &mut self.columns[index];
        let cells = self.rows.iter_mut().map(move |row| &mut row[index]);
        (column, cells)
    }
}

/// A single row borrowed from a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [Column],
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    /// Value of the named column.
    pub fn get(&self, name: &str) -> Option<&'a Cell> {
        let cells = self.cells;
        self.columns
            .iter()
            .position(|c| c.name == name)
            .map(|i| &cells[i])
    }

    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    /// `(column name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Cell)> + 'a {
        let columns: &'a [Column] = self.columns;
        let cells: &'a [Cell] = self.cells;
        columns.iter().map(|c| c.name.as_str()).zip(cells.iter())
    }
}
