//! Error types for Grocer
//!
//! Uses `thiserror` for library errors. Parse errors carry the file line
//! they came from so a bad row can be located without a debugger.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Grocer operations
pub type GrocerResult<T> = Result<T, GrocerError>;

/// Main error type for Grocer operations
#[derive(Error, Debug)]
pub enum GrocerError {
    /// Orders file does not exist at the configured location
    #[error("orders file not found: {path}")]
    OrdersFileNotFound { path: PathBuf },

    /// A record had no fields at all
    #[error("empty order record at line {line}")]
    EmptyRecord { line: u64 },

    /// First field of a record did not parse as an order id
    #[error("invalid order id '{value}' at line {line}")]
    InvalidOrderId { value: String, line: u64 },

    /// A price field did not parse as a decimal number
    #[error("invalid price '{value}' for product '{product}' at line {line}")]
    InvalidPrice {
        product: String,
        value: String,
        line: u64,
    },

    /// A product name at the end of a record had no price field
    #[error("missing price for product '{product}' at line {line}")]
    MissingPrice { product: String, line: u64 },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
