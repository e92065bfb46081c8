//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod id;
pub mod quantity;

pub use error::{InventoryError, InventoryResult};
pub use id::ItemId;
pub use quantity::{DEFAULT_LOW_STOCK_THRESHOLD, Quantity};
