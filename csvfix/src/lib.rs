//! # csvfix - fixed-point amounts for holder CSV exports
//!
//! csvfix reads a CSV file, rewrites one numeric column from scientific
//! notation (`1.23e10`) to plain digits (`"12300000000"`) and prints the
//! result as JSON records or as an aligned text table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│ JSON / Text │
//! │  (UTF8/ISO) │     │ (typed cols)│     │(fixed-point)│     │  (records)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use csvfix::{transform_text, OutputFormat};
//!
//! let csv = "Name,Owed\nAlice,1.5e3\nBob,200\nCarol,";
//! let json = transform_text(csv, "Owed", OutputFormat::Json).unwrap();
//! assert_eq!(
//!     json,
//!     r#"[{"Name":"Alice","Owed":"1500"},{"Name":"Bob","Owed":"200"},{"Name":"Carol","Owed":null}]"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`config`] - Fixed input path, column and display limits
//! - [`models`] - Table, columns and cells
//! - [`parser`] - File loading and CSV parsing with type inference
//! - [`transform`] - Fixed-point rewrite and the pipeline
//! - [`output`] - JSON and text rendering

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod output;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{EmitError, LoadError, ParseError, PipelineError, TransformError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Cell, Column, ColumnType, Row, Table};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_bytes, infer_column_type, parse_cell, parse_table, parse_table_with_delimiter,
    read_file,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    convert_scientific_to_numeric, emit, format_fixed_point, run_pipeline, transform_text,
    OutputFormat, Pipeline, Processed,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use output::{render_table, to_json_records, to_json_records_pretty, to_json_value, TextTable};
