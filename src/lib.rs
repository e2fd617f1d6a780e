//! Grocer - grocery order ledger
//!
//! Grocer models grocery orders (an id plus a mapping of product names to
//! prices), computes tax-inclusive totals, and loads a fixed set of orders
//! from a comma-separated file.

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod store;

// Re-exports for convenience
pub use config::{load_or_default, load_with_warnings, Config, ConfigWarning};
pub use error::{GrocerError, GrocerResult};
pub use models::{Order, ProductMap, TAX_RATE};
pub use parser::{parse_file, parse_record, parse_records};
pub use store::OrderStore;
