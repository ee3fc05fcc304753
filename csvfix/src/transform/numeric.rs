//! Fixed-point rewrite of a numeric column.
//!
//! Large or very precise floats print in exponent form (`1.23e10`). This
//! rewrites every value of one column as plain digits rounded to zero
//! decimal places (`"12300000000"`), stored as text.

use log::{debug, info};

use crate::error::{TransformError, TransformResult};
use crate::models::{Cell, ColumnType, Table};

/// Rewrite `column` as fixed-point strings.
///
/// Fails with [`TransformError::ColumnNotNumeric`] if `column` is missing
/// or not an integer/float column; the table is left untouched in that case.
/// Missing cells stay missing. On success the column's type becomes
/// [`ColumnType::Text`] and the number of rewritten cells is returned.
///
/// # Example
/// ```
/// use csvfix::{convert_scientific_to_numeric, parse_table, Cell};
///
/// let mut table = parse_table("Name,Owed\nAlice,1.23e+10").unwrap();
/// convert_scientific_to_numeric(&mut table, "Owed").unwrap();
///
/// let owed = table.row(0).unwrap().get("Owed").cloned();
/// assert_eq!(owed, Some(Cell::Text("12300000000".into())));
/// ```
pub fn convert_scientific_to_numeric(table: &mut Table, column: &str) -> TransformResult<usize> {
    let numeric = table.numeric_columns();
    let index = match table.column_index(column) {
        Some(i) if numeric.iter().any(|name| name == column) => i,
        _ => {
            return Err(TransformError::ColumnNotNumeric {
                column: column.to_string(),
                numeric,
            });
        }
    };

    let (target, cells) = table.column_mut(index);
    debug!("Rewriting {} column '{}'", target.dtype, target.name);
    target.dtype = ColumnType::Text;

    let mut rewritten = 0;
    for cell in cells {
        if let Some(text) = format_fixed_point(cell) {
            *cell = Cell::Text(text);
            rewritten += 1;
        }
    }

    info!("Rewrote {} values in column '{}'", rewritten, column);
    Ok(rewritten)
}

/// Render a numeric cell with zero decimal places and no exponent.
///
/// Halves round to even. Missing and text cells yield `None`, and so does
/// NaN, which is a missing value rather than a number.
pub fn format_fixed_point(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Integer(i) => Some(i.to_string()),
        Cell::Float(f) if f.is_nan() => None,
        Cell::Float(f) => Some(format!("{f:.0}")),
        Cell::Text(_) | Cell::Missing => None,
    }
}
