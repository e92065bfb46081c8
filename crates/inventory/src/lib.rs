//! Inventory state management.
//!
//! [`InventoryStore`] owns the item -> quantity mapping and is the only way to
//! mutate it. Persistence is a plain JSON document (see [`persistence`]).

pub mod log;
pub mod persistence;
pub mod report;
pub mod store;

pub use log::LogEntry;
pub use persistence::{DEFAULT_INVENTORY_FILE, PersistenceError, Stock};
pub use report::StockReport;
pub use store::InventoryStore;
