//! Common test utilities for Grocer integration tests.
//!
//! Provides tempfile-backed orders files and a generator for the 100-order
//! fixture used by the load/find scenarios.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write an orders file with the given content into a fresh temp dir.
///
/// Returns the dir (keep it alive) and the file path.
pub fn orders_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// A three-order fixture small enough to assert against by hand.
pub const SMALL_ORDERS: &str = "\
1,banana,1.99,cracker,3.00
2,milk,2.49
3
";

/// Generate a 100-order CSV, ids 1..=100, two products each.
///
/// Prices are derived from the id so every row is distinct and assertions
/// can recompute expected values.
pub fn hundred_orders_csv() -> String {
    let mut csv = String::new();
    for id in 1..=100u64 {
        writeln!(
            csv,
            "{id},item-{id},{}.{:02},extra-{id},2.50",
            id % 10 + 1,
            id % 100
        )
        .unwrap();
    }
    csv
}
