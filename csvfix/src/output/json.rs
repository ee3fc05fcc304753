//! JSON records output.
//!
//! A table becomes an array with one object per row. Object keys follow
//! column order, so the output does not depend on `serde_json`'s map
//! ordering.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{EmitError, EmitResult};
use crate::models::{Cell, Row, Table};

/// Serializes a table as an array of row objects.
#[derive(Debug, Clone, Copy)]
pub struct Records<'a>(pub &'a Table);

struct Record<'a>(Row<'a>);

impl Serialize for Records<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.row_count()))?;
        for row in self.0.rows() {
            seq.serialize_element(&Record(row))?;
        }
        seq.end()
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.cells().len()))?;
        for (name, cell) in self.0.iter() {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

/// Serialize `table` as a compact JSON array of records.
///
/// # Example
/// ```
/// use csvfix::{parse_table, to_json_records};
///
/// let table = parse_table("Name,Owed\nBob,200").unwrap();
/// assert_eq!(to_json_records(&table).unwrap(), r#"[{"Name":"Bob","Owed":200}]"#);
/// ```
pub fn to_json_records(table: &Table) -> EmitResult<String> {
    ensure_finite(table)?;
    Ok(serde_json::to_string(&Records(table))?)
}

/// Same as [`to_json_records`], indented.
pub fn to_json_records_pretty(table: &Table) -> EmitResult<String> {
    ensure_finite(table)?;
    Ok(serde_json::to_string_pretty(&Records(table))?)
}

/// Convert `table` into a `serde_json::Value` array.
pub fn to_json_value(table: &Table) -> EmitResult<Value> {
    ensure_finite(table)?;
    Ok(serde_json::to_value(Records(table))?)
}

/// JSON cannot carry NaN or infinity; fail rather than write `null`.
fn ensure_finite(table: &Table) -> EmitResult<()> {
    for (row_index, row) in table.rows().enumerate() {
        for (name, cell) in row.iter() {
            if let Cell::Float(f) = cell {
                if !f.is_finite() {
                    return Err(EmitError::NonFiniteFloat {
                        column: name.to_string(),
                        row: row_index,
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, ColumnType};
    use crate::parser::parse_table;
    use serde_json::json;

    #[test]
    fn test_native_types() {
        let table = parse_table("Name,Owed,Id\nAlice,1.5e3,1\nCarol,,2").unwrap();
        let value = to_json_value(&table).unwrap();

        assert_eq!(
            value,
            json!([
                {"Name": "Alice", "Owed": 1500.0, "Id": 1},
                {"Name": "Carol", "Owed": null, "Id": 2}
            ])
        );
    }

    #[test]
    fn test_keys_follow_column_order() {
        let table = parse_table("z,a,m\n1,x,2.5").unwrap();
        let json = to_json_records(&table).unwrap();

        assert_eq!(json, r#"[{"z":1,"a":"x","m":2.5}]"#);
    }

    #[test]
    fn test_scientific_value_not_fixed_without_transform() {
        let table = parse_table("Owed\n1.23e+10").unwrap();
        let json = to_json_records(&table).unwrap();

        assert_eq!(json, r#"[{"Owed":12300000000.0}]"#);
    }

    #[test]
    fn test_blank_text_and_nan_spelling() {
        let mut table = parse_table("Name,Owed\n   ,NAN\nBob,5\n").unwrap();
        assert_eq!(
            to_json_records(&table).unwrap(),
            r#"[{"Name":"   ","Owed":null},{"Name":"Bob","Owed":5.0}]"#
        );

        crate::transform::convert_scientific_to_numeric(&mut table, "Owed").unwrap();
        assert_eq!(
            to_json_records(&table).unwrap(),
            r#"[{"Name":"   ","Owed":null},{"Name":"Bob","Owed":"5"}]"#
        );
    }

    #[test]
    fn test_empty_table() {
        let table = parse_table("Name,Owed\n").unwrap();
        assert_eq!(to_json_records(&table).unwrap(), "[]");
    }

    #[test]
    fn test_non_finite_rejected() {
        let table = Table::new(
            vec![Column::new("Owed", ColumnType::Float)],
            vec![vec![Cell::Float(1.0)], vec![Cell::Float(f64::INFINITY)]],
        );

        match to_json_records(&table) {
            Err(EmitError::NonFiniteFloat { column, row }) => {
                assert_eq!(column, "Owed");
                assert_eq!(row, 1);
            }
            other => panic!("expected non-finite error, got {other:?}"),
        }
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let table = parse_table("Name,Owed\nBob,200").unwrap();
        let pretty = to_json_records_pretty(&table).unwrap();

        assert!(pretty.contains('\n'));
        let parsed: Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed[0]["Owed"], 200);
    }
}
