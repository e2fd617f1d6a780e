//! Orders file parser
//!
//! Handles the comma-separated orders format, one order per record:
//!
//! ```text
//! <id>,<product_name>,<price>,<product_name>,<price>,...
//! ```
//!
//! Records have `1 + 2*k` fields for an order with `k` products. Malformed
//! records fail the whole parse with an error naming the line, rather than
//! being skipped silently.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;

use crate::error::{GrocerError, GrocerResult};
use crate::models::{Order, ProductMap};

/// Parse one record into an `Order`
///
/// The first field is the order id, the rest are alternating
/// product-name/price pairs. If the same product name appears twice in one
/// record, the later pair wins.
pub fn parse_record(record: &StringRecord, line: u64) -> GrocerResult<Order> {
    let mut fields = record.iter();

    let id_field = fields.next().ok_or(GrocerError::EmptyRecord { line })?;
    let id: u64 = id_field
        .parse()
        .map_err(|_| GrocerError::InvalidOrderId {
            value: id_field.to_string(),
            line,
        })?;

    let mut products = ProductMap::new();
    while let Some(name) = fields.next() {
        let price_field = fields.next().ok_or_else(|| GrocerError::MissingPrice {
            product: name.to_string(),
            line,
        })?;
        let price: Decimal = price_field
            .parse()
            .map_err(|_| GrocerError::InvalidPrice {
                product: name.to_string(),
                value: price_field.to_string(),
                line,
            })?;
        products.insert(name.to_string(), price);
    }

    Ok(Order::new(id, products))
}

/// Parse already-read records into orders, preserving record order
///
/// Line numbers in errors are 1-based record indices.
pub fn parse_records(records: &[StringRecord]) -> GrocerResult<Vec<Order>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_record(record, i as u64 + 1))
        .collect()
}

/// Parse an orders file into orders, preserving file order
///
/// The file has no header row. Whitespace around fields is trimmed and
/// blank lines are skipped.
pub fn parse_file(path: &Path) -> GrocerResult<Vec<Order>> {
    if !path.is_file() {
        return Err(GrocerError::OrdersFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut orders = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        orders.push(parse_record(&record, line)?);
    }

    Ok(orders)
}
