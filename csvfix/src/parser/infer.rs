//! Column type inference.
//!
//! Pure functions from raw field strings to a [`ColumnType`] and from a raw
//! field to a typed [`Cell`]. No I/O and no table state.

use crate::config::NA_VALUES;
use crate::models::{Cell, ColumnType};

/// True if the raw field is one of the missing-value tokens.
///
/// Tokens match the field exactly; a whitespace-only field is text.
pub fn is_missing(raw: &str) -> bool {
    NA_VALUES.contains(&raw)
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Infer the type of a column from all of its raw values.
///
/// - no values at all: [`ColumnType::Text`]
/// - only missing values: [`ColumnType::Float`]
/// - every present value an `i64`: [`ColumnType::Integer`]
/// - every present value a real number: [`ColumnType::Float`]
/// - otherwise [`ColumnType::Text`]
pub fn infer_column_type(values: &[&str]) -> ColumnType {
    if values.is_empty() {
        return ColumnType::Text;
    }

    let mut dtype = ColumnType::Integer;
    for raw in values.iter().filter(|raw| !is_missing(raw)) {
        if dtype == ColumnType::Integer && parse_integer(raw).is_some() {
            continue;
        }
        if parse_float(raw).is_some() {
            dtype = ColumnType::Float;
        } else {
            return ColumnType::Text;
        }
    }

    if values.iter().all(|raw| is_missing(raw)) {
        ColumnType::Float
    } else {
        dtype
    }
}

/// Convert one raw field according to its column's type.
pub fn parse_cell(raw: &str, dtype: ColumnType) -> Cell {
    if is_missing(raw) {
        return Cell::Missing;
    }
    match dtype {
        ColumnType::Integer => match parse_integer(raw) {
            Some(i) => Cell::Integer(i),
            None => Cell::Text(raw.to_string()),
        },
        ColumnType::Float => match parse_float(raw) {
            // `str::parse` accepts any spelling of NaN, not just the tokens.
            Some(f) if f.is_nan() => Cell::Missing,
            Some(f) => Cell::Float(f),
            None => Cell::Text(raw.to_string()),
        },
        ColumnType::Text => Cell::Text(raw.to_string()),
    }
}
