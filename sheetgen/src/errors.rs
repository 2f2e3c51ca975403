use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving configuration at startup.
///
/// All of these are fatal: the tool refuses to run with a configuration it
/// cannot fully resolve.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or a value has the wrong type.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised while extracting a schema from one worksheet.
///
/// These are structural data errors, fatal for the sheet that produced them.
/// The driver decides whether remaining sheets are still processed.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No row whose index-column cell holds the number 1 was found.
    #[error("cannot find first row, which has index cell as 1")]
    FirstRowNotFound,

    /// A cell held a value kind the extractor does not accept at that position.
    #[error("unsupported {what} cell at row {row}, column {col}")]
    CellType { what: &'static str, row: u32, col: u32 },

    /// The type cell held a literal outside the recognized type set.
    #[error("unknown field type '{0}'")]
    UnknownType(String),

    /// The scan reached a column that is not configured.
    #[error("source column '{0}' is not configured")]
    ColumnUnconfigured(&'static str),

    /// The workbook could not be opened or a sheet could not be read.
    #[error("workbook error: {0}")]
    Workbook(String),
}

pub type SchemaResult<T> = Result<T, SchemaError>;
