//! Error types for Sheep core.

use thiserror::Error;

use sheep_engine::engine::ParseError;

/// Errors that can occur while building or editing a sheet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("Unable to parse: {input}")]
    Parse {
        input: String,
        #[source]
        source: ParseError,
    },

    #[error("Circular reference: {input}")]
    CircularReference { input: String },

    #[error("Cell out of bounds: row {row}, column {column}")]
    OutOfBounds { row: usize, column: usize },

    #[error("Sheet can have at most 26 columns, got {0}")]
    TooManyColumns(usize),

    #[error("Invalid built-in name: {0:?}")]
    InvalidBuiltIn(String),

    #[error("Built-in name {0} is a cell address")]
    BuiltInShadowsCell(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;
