//! Fixed configuration.
//!
//! The input file and the target column are not configurable at runtime;
//! everything here is a compile-time constant.

/// Input CSV file, relative to the working directory.
pub const INPUT_PATH: &str = "./holders.csv";

/// Column rewritten from scientific notation to fixed-point strings.
pub const TARGET_COLUMN: &str = "Owed";

/// Field delimiter of the input file.
pub const DELIMITER: u8 = b',';

/// Tables with more rows than this are truncated when printed.
pub const MAX_DISPLAY_ROWS: usize = 60;

/// Rows shown at each end of a truncated table.
pub const DISPLAY_EDGE_ROWS: usize = 5;

/// Field contents read as a missing value.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];
