//! Output formats.
//!
//! - [`json`]: array of row objects, keys in column order
//! - [`table`]: column-aligned text for terminals

pub mod json;
pub mod table;

pub use json::{to_json_records, to_json_records_pretty, to_json_value, Records};
pub use table::{format_cell, render_table, TextRow, TextTable};
