//! High-level pipeline API.
//!
//! Combines every step: load the file, parse it, rewrite the target column
//! and render the result. Nothing is emitted unless all steps succeed.
//!
//! # Example
//!
//! ```rust,no_run
//! use csvfix::{OutputFormat, Pipeline};
//!
//! // ./holders.csv, column "Owed"
//! let json = Pipeline::default().run(OutputFormat::Json).unwrap();
//! println!("{json}");
//! ```

use log::info;
use std::path::{Path, PathBuf};

use crate::config::{INPUT_PATH, TARGET_COLUMN};
use crate::error::{EmitResult, PipelineResult};
use crate::models::Table;
use crate::output::{render_table, to_json_records};
use crate::parser::{parse_table, read_file};
use super::numeric::convert_scientific_to_numeric;

/// How the final table is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Compact JSON array of records.
    #[default]
    Json,
    /// Column-aligned text.
    Table,
}

/// Result of the load, parse and rewrite steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// Table with the target column rewritten.
    pub table: Table,
    /// Number of cells that were rewritten.
    pub rewritten: usize,
}

/// A single run over one file and one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    /// CSV file to read.
    pub input: PathBuf,
    /// Column to rewrite as fixed-point strings.
    pub column: String,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(INPUT_PATH, TARGET_COLUMN)
    }
}

impl Pipeline {
    pub fn new(input: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            column: column.into(),
        }
    }

    /// Load and parse the input without rewriting anything.
    pub fn load(&self) -> PipelineResult<Table> {
        info!("Reading {}", self.input.display());
        let text = read_file(&self.input)?;
        Ok(parse_table(&text)?)
    }

    /// Load, parse and rewrite the target column.
    pub fn process(&self) -> PipelineResult<Processed> {
        let mut table = self.load()?;
        let rewritten = convert_scientific_to_numeric(&mut table, &self.column)?;
        Ok(Processed { table, rewritten })
    }

    /// Run every step and return the rendered output.
    pub fn run(&self, format: OutputFormat) -> PipelineResult<String> {
        let processed = self.process()?;
        Ok(emit(&processed.table, format)?)
    }
}

/// Run the pipeline on `path`, rewriting `column`.
pub fn run_pipeline(path: &Path, column: &str, format: OutputFormat) -> PipelineResult<String> {
    Pipeline::new(path, column).run(format)
}

/// Same as [`run_pipeline`] but on CSV text already in memory.
///
/// # Example
/// ```
/// use csvfix::{transform_text, OutputFormat};
///
/// let json = transform_text("Name,Owed\nAlice,1.5e3", "Owed", OutputFormat::Json).unwrap();
/// assert_eq!(json, r#"[{"Name":"Alice","Owed":"1500"}]"#);
/// ```
pub fn transform_text(text: &str, column: &str, format: OutputFormat) -> PipelineResult<String> {
    let mut table = parse_table(text)?;
    convert_scientific_to_numeric(&mut table, column)?;
    Ok(emit(&table, format)?)
}

/// Render `table` in the requested format.
pub fn emit(table: &Table, format: OutputFormat) -> EmitResult<String> {
    match format {
        OutputFormat::Json => to_json_records(table),
        OutputFormat::Table => Ok(render_table(table)),
    }
}
