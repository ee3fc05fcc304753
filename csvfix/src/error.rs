//! Error types for the csvfix pipeline.
//!
//! One error type per stage, wrapped by a top-level [`PipelineError`]:
//!
//! - [`LoadError`] - reading the input file
//! - [`ParseError`] - interpreting the text as CSV
//! - [`TransformError`] - rewriting the target column
//! - [`EmitError`] - serializing the table
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Loader Errors
// =============================================================================

/// Errors while reading the input file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to open or read the file.
    #[error("Failed to read file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Parser Errors
// =============================================================================

/// Errors during CSV parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No header row.
    #[error("No columns to parse from input")]
    Empty,

    /// Malformed CSV reported by the reader.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// A data row has more fields than the header.
    #[error("Line {line}: expected {expected} fields, saw {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while rewriting a column.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The requested column is absent or not integer/float.
    #[error("Column '{column}' is not numeric (numeric columns: {})", numeric.join(", "))]
    ColumnNotNumeric {
        column: String,
        numeric: Vec<String>,
    },
}

// =============================================================================
// Emitter Errors
// =============================================================================

/// Errors while serializing a table.
#[derive(Debug, Error)]
pub enum EmitError {
    /// JSON has no representation for NaN or infinity.
    #[error("Cannot serialize non-finite value in column '{column}', row {row}")]
    NonFiniteFloat { column: String, row: usize },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::Pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loader error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Parse(#[from] ParseError),

    /// Transformation error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Output error.
    #[error("Output error: {0}")]
    Emit(#[from] EmitError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for emitter operations.
pub type EmitResult<T> = Result<T, EmitError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // ParseError -> PipelineError
        let parse_err = ParseError::Empty;
        let pipeline_err: PipelineError = parse_err.into();
        assert!(pipeline_err.to_string().contains("No columns"));

        // TransformError -> PipelineError
        let transform_err = TransformError::ColumnNotNumeric {
            column: "Name".into(),
            numeric: vec!["Owed".into()],
        };
        let pipeline_err: PipelineError = transform_err.into();
        assert!(matches!(pipeline_err, PipelineError::Transform(_)));
        assert!(pipeline_err.to_string().contains("Name"));
    }

    #[test]
    fn test_column_not_numeric_format() {
        let err = TransformError::ColumnNotNumeric {
            column: "Owed".into(),
            numeric: vec!["Id".into(), "Balance".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Owed'"));
        assert!(msg.contains("Id, Balance"));
    }

    #[test]
    fn test_load_error_mentions_path() {
        let err = LoadError::Io {
            path: PathBuf::from("./holders.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("./holders.csv"));
    }

    #[test]
    fn test_field_count_format() {
        let err = ParseError::FieldCount {
            line: 4,
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "Line 4: expected 2 fields, saw 3");
    }
}
