//! CSV to [`Table`] parser.
//!
//! The first record is the header. Every column gets a type inferred from
//! all of its values (see [`infer`]), then each field is converted to a
//! typed [`Cell`](crate::models::Cell).
//!
//! Field count policy: rows shorter than the header are padded with missing
//! values, rows longer than the header are rejected.

pub mod infer;
pub mod loader;

use log::{debug, info};
use std::collections::{HashMap, HashSet};

use crate::config::DELIMITER;
use crate::error::{ParseError, ParseResult};
use crate::models::{Column, Table};

pub use infer::{infer_column_type, is_missing, parse_cell};
pub use loader::{decode_bytes, decode_content, detect_encoding, read_file, DecodedText};

/// Parse comma-delimited text with a header row.
///
/// # Example
/// ```
/// use csvfix::parse_table;
///
/// let table = parse_table("Name,Owed\nAlice,1.5e3\nBob,200").unwrap();
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.column_names(), vec!["Name", "Owed"]);
/// ```
pub fn parse_table(text: &str) -> ParseResult<Table> {
    parse_table_with_delimiter(text, DELIMITER)
}

/// Parse delimited text with a header row and an explicit delimiter.
pub fn parse_table_with_delimiter(text: &str, delimiter: u8) -> ParseResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = reader.headers()?.clone();
    if is_blank(&header) {
        return Err(ParseError::Empty);
    }
    let names = unique_column_names(&header.iter().collect::<Vec<_>>());
    let width = names.len();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        if record.len() > width {
            return Err(ParseError::FieldCount {
                line: record.position().map_or(0, |p| p.line()),
                expected: width,
                found: record.len(),
            });
        }
        records.push(record);
    }

    let columns: Vec<Column> = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let values: Vec<&str> = records.iter().map(|r| r.get(i).unwrap_or("")).collect();
            let dtype = infer_column_type(&values);
            debug!("Column '{}' inferred as {}", name, dtype);
            Column::new(name, dtype)
        })
        .collect();

    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .enumerate()
                .map(|(i, column)| parse_cell(record.get(i).unwrap_or(""), column.dtype))
                .collect()
        })
        .collect();

    let table = Table::new(columns, rows);
    info!(
        "Parsed {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

/// A record with no content at all (a blank line).
fn is_blank(record: &csv::StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|field| field.is_empty())
}

/// Make header names unique.
///
/// Empty names become `Unnamed: <position>`; repeated names get a `.N`
/// suffix (`a`, `a.1`, `a.2`), skipping names that are already taken.
fn unique_column_names(raw: &[&str]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(raw.len());

    for (i, name) in raw.iter().enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {i}")
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        if taken.contains(&candidate) {
            let count = counts.entry(base.clone()).or_insert(0);
            while taken.contains(&candidate) {
                *count += 1;
                candidate = format!("{base}.{count}");
            }
        }

        taken.insert(candidate.clone());
        names.push(candidate);
    }

    names
}
