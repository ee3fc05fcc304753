//! Column-aligned text output.
//!
//! The data flow is:
//! 1. [`Table`] (typed cells)
//! 2. [`TextTable`] (display strings, rows already truncated)
//! 3. `Display` (alignment and padding)
//!
//! `TextTable` only formats; it never changes the data.

use std::fmt;

use crate::config::{DISPLAY_EDGE_ROWS, MAX_DISPLAY_ROWS};
use crate::models::{Cell, Table};

const ELLIPSIS: &str = "...";
const SEPARATOR: &str = "  ";

/// A single printed row.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRow {
    /// Row position in the source table, `..` for the elision row.
    pub label: String,
    /// One display string per column.
    pub values: Vec<String>,
}

/// Display-ready table.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTable {
    pub headers: Vec<String>,
    pub rows: Vec<TextRow>,
    /// `[N rows x M columns]` when rows were elided.
    pub footer: Option<String>,
}

impl TextTable {
    /// Format `table`, keeping at most `max_rows` rows.
    ///
    /// Longer tables keep `edge_rows` rows from each end with an elision
    /// row in between. At least one row is kept at each end.
    pub fn from_table(table: &Table, max_rows: usize, edge_rows: usize) -> Self {
        let edge_rows = edge_rows.max(1);
        let headers = table.column_names().iter().map(|s| s.to_string()).collect();
        let total = table.row_count();
        let truncated = total > max_rows;

        let positions: Vec<usize> = if truncated {
            let head = edge_rows.min(total);
            let tail = total.saturating_sub(edge_rows).max(head);
            (0..head).chain(tail..total).collect()
        } else {
            (0..total).collect()
        };

        let mut rows = Vec::with_capacity(positions.len() + 1);
        for (n, &position) in positions.iter().enumerate() {
            if truncated && n == edge_rows.min(total) {
                rows.push(TextRow {
                    label: "..".to_string(),
                    values: vec![ELLIPSIS.to_string(); table.column_count()],
                });
            }
            if let Some(row) = table.row(position) {
                rows.push(TextRow {
                    label: position.to_string(),
                    values: row.cells().iter().map(format_cell).collect(),
                });
            }
        }

        let footer =
            truncated.then(|| format!("[{} rows x {} columns]", total, table.column_count()));

        TextTable {
            headers,
            rows,
            footer,
        }
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return write!(
                f,
                "Empty table\nColumns: [{}]\nIndex: []",
                self.headers.join(", ")
            );
        }

        let label_width = self.rows.iter().map(|r| width(&r.label)).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.values.get(i))
                    .map(|v| width(v))
                    .chain(std::iter::once(width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (header, &w) in self.headers.iter().zip(&widths) {
            write!(f, "{SEPARATOR}{header:>w$}")?;
        }

        for row in &self.rows {
            write!(f, "\n{:<label_width$}", row.label)?;
            for (value, &w) in row.values.iter().zip(&widths) {
                write!(f, "{SEPARATOR}{value:>w$}")?;
            }
        }

        if let Some(footer) = &self.footer {
            write!(f, "\n\n{footer}")?;
        }
        Ok(())
    }
}

/// Render `table` as aligned text with the default display limits.
pub fn render_table(table: &Table) -> String {
    TextTable::from_table(table, MAX_DISPLAY_ROWS, DISPLAY_EDGE_ROWS).to_string()
}

/// Display string for one cell.
///
/// Floats use their shortest round-trip form, which switches to exponent
/// notation for very large and very small magnitudes.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Integer(i) => i.to_string(),
        Cell::Float(v) => format!("{v:?}"),
        Cell::Text(s) => s.clone(),
        Cell::Missing => "NaN".to_string(),
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}
