use std::path::Path;

use serde_json::Value as JsonValue;

use stockroom_core::quantity::{is_present, quantity_from_value, render_value};
use stockroom_core::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryError, InventoryResult, ItemId, Quantity};

use crate::log::LogEntry;
use crate::persistence::{self, Stock};
use crate::report::StockReport;

/// Aggregate root: the item -> quantity mapping.
///
/// Mutated only through [`add`](Self::add) and [`remove`](Self::remove).
/// Removal deletes any entry whose quantity drops to zero or below; addition
/// only accumulates, so a negative addition can leave a non-positive entry
/// until the next removal touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    stock: Stock,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stock(stock: Stock) -> Self {
        Self { stock }
    }

    /// Build a store from the document at `path`.
    ///
    /// Missing or unreadable documents yield an empty store (see
    /// [`persistence::load`]).
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        Self::from_stock(persistence::load(path))
    }

    /// Persist the current stock to `path`, overwriting it.
    pub fn save_to(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        persistence::save(&self.stock, path)?;
        Ok(())
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn into_stock(self) -> Stock {
        self.stock
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    /// Add `qty` units of `item`.
    ///
    /// An empty `item` is ignored. On success one [`LogEntry`] is appended to
    /// `log` when a sink is supplied.
    pub fn add(&mut self, item: &str, qty: Quantity, log: Option<&mut Vec<LogEntry>>) {
        let Ok(item) = ItemId::parse(item) else {
            return;
        };

        let current = self.stock.entry(item.clone()).or_insert(0);
        *current = current.saturating_add(qty);
        tracing::debug!(item = %item, qty, total = *current, "stock added");

        if let Some(log) = log {
            log.push(LogEntry::now(item, qty));
        }
    }

    /// Add from dynamically-typed input (e.g. parsed JSON or CLI arguments).
    ///
    /// Absent items (null, empty, zero, ...) are ignored. Non-integer
    /// quantities are rejected without touching stock or `log`.
    pub fn add_untyped(
        &mut self,
        item: &JsonValue,
        qty: &JsonValue,
        log: Option<&mut Vec<LogEntry>>,
    ) -> InventoryResult<()> {
        if !is_present(item) {
            return Ok(());
        }

        let item = render_value(item);
        let qty = quantity_from_value(qty)
            .ok_or_else(|| InventoryError::invalid_quantity(item.as_str(), render_value(qty)))?;

        self.add(&item, qty, log);
        Ok(())
    }

    /// Remove `qty` units of `item`, deleting the entry at zero or below.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> InventoryResult<()> {
        let Some(current) = self.stock.get_mut(item) else {
            return Err(InventoryError::not_in_stock(item));
        };

        *current = current.saturating_sub(qty);
        let remaining = *current;
        if remaining <= 0 {
            self.stock.remove(item);
        }

        tracing::debug!(item, qty, remaining, "stock removed");
        Ok(())
    }

    /// Remove from dynamically-typed input, validating the quantity the same
    /// way [`add_untyped`](Self::add_untyped) does.
    pub fn remove_untyped(&mut self, item: &JsonValue, qty: &JsonValue) -> InventoryResult<()> {
        let item = render_value(item);
        if !self.contains(&item) {
            return Err(InventoryError::not_in_stock(item));
        }

        let qty = quantity_from_value(qty)
            .ok_or_else(|| InventoryError::invalid_quantity(item.as_str(), render_value(qty)))?;

        self.remove(&item, qty)
    }

    /// Current quantity of `item`, or zero when absent.
    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.stock.get(item).copied().unwrap_or(0)
    }

    /// Items whose quantity is at or below `threshold`.
    pub fn check_low_items(&self, threshold: Quantity) -> Vec<ItemId> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty <= threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// [`check_low_items`](Self::check_low_items) at [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn low_items(&self) -> Vec<ItemId> {
        self.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    pub fn report(&self) -> StockReport {
        StockReport::new(self.stock.iter().map(|(item, qty)| (item.clone(), *qty)))
    }
}
