//! File-backed order store
//!
//! The store holds an explicit path to the orders file; nothing here keeps
//! process-global state. The file is re-read on each call, which is fine for
//! the small, static datasets this tool works with.

use std::path::{Path, PathBuf};

use crate::error::GrocerResult;
use crate::models::{Order, ProductMap};
use crate::parser;

/// Read-only store over a comma-separated orders file
#[derive(Debug, Clone)]
pub struct OrderStore {
    path: PathBuf,
}

impl OrderStore {
    /// Create a store over the given orders file. Does not touch the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing orders file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All orders in the file, in file order
    pub fn all(&self) -> GrocerResult<Vec<Order>> {
        parser::parse_file(&self.path)
    }

    /// Product mapping of the first order with the given id
    ///
    /// Returns `Ok(None)` when no order has that id; absence is not an
    /// error. Linear scan, no index.
    pub fn find(&self, id: u64) -> GrocerResult<Option<ProductMap>> {
        let orders = self.all()?;
        Ok(orders
            .into_iter()
            .find(|order| order.id == id)
            .map(|order| order.products))
    }
}
