//! Core data models for Grocer
//!
//! Defines the fundamental data structures:
//! - `Order`: a purchase with an id and a set of named, priced products
//! - `ProductMap`: product name -> unit price, keys unique

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Sales tax applied on top of the product subtotal (7.5%)
pub const TAX_RATE: Decimal = dec!(0.075);

/// Mapping from product name to unit price
///
/// A `BTreeMap` keeps keys unique and iteration deterministic.
pub type ProductMap = BTreeMap<String, Decimal>;

/// An order: one customer's purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, assigned at construction
    pub id: u64,

    /// Products in this order, name -> unit price
    pub products: ProductMap,
}

impl Order {
    /// Create a new order with an initial product mapping (may be empty)
    pub fn new(id: u64, products: ProductMap) -> Self {
        Self { id, products }
    }

    /// Tax-inclusive total: subtotal plus 7.5% tax
    ///
    /// The tax amount is rounded to 2 decimal places before being added,
    /// rounding halves away from zero. An empty order totals zero.
    pub fn total(&self) -> Decimal {
        let subtotal: Decimal = self.products.values().sum();
        let tax = (subtotal * TAX_RATE)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        subtotal + tax
    }

    /// Add a product to the order
    ///
    /// Returns `false` and leaves the order unchanged if a product with the
    /// same name is already present (the existing price is NOT updated).
    pub fn add_product(&mut self, name: impl Into<String>, price: Decimal) -> bool {
        let name = name.into();
        if self.products.contains_key(&name) {
            return false;
        }
        self.products.insert(name, price);
        true
    }

    /// Remove a product from the order
    ///
    /// Returns `false` and leaves the order unchanged if no product with
    /// that name is present.
    pub fn remove_product(&mut self, name: &str) -> bool {
        self.products.remove(name).is_some()
    }
}
