//! Domain error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// The `Display` output of each variant is the exact console line reported to
/// operators, so callers can print these errors verbatim. None of them are
/// fatal: every operation that returns one has left the stock untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A quantity supplied through a dynamic boundary was not an integer.
    #[error("Error: Quantity '{qty}' for item '{item}' is not a number.")]
    InvalidQuantity { item: String, qty: String },

    /// A removal targeted an item that has no stock entry.
    #[error("Warning: Item '{item}' not in stock, cannot remove.")]
    NotInStock { item: String },

    /// An item identifier was empty.
    #[error("invalid item id: {0}")]
    InvalidItemId(String),

    /// Reading or writing the persisted document failed.
    #[error("{0}")]
    Persistence(String),
}

impl InventoryError {
    pub fn invalid_quantity(item: impl Into<String>, qty: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            item: item.into(),
            qty: qty.into(),
        }
    }

    pub fn not_in_stock(item: impl Into<String>) -> Self {
        Self::NotInStock { item: item.into() }
    }

    pub fn invalid_item_id(msg: impl Into<String>) -> Self {
        Self::InvalidItemId(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Whether this error is an operator warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::NotInStock { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_quantity_message_is_exact() {
        let err = InventoryError::invalid_quantity("123", "ten");
        assert_eq!(
            err.to_string(),
            "Error: Quantity 'ten' for item '123' is not a number."
        );
        assert!(!err.is_warning());
    }

    #[test]
    fn not_in_stock_message_is_exact() {
        let err = InventoryError::not_in_stock("grape");
        assert_eq!(
            err.to_string(),
            "Warning: Item 'grape' not in stock, cannot remove."
        );
        assert!(err.is_warning());
    }
}
