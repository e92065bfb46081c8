use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemId, Quantity};

/// Record of one successful addition, handed to a caller-owned sink.
///
/// Renders as `<timestamp>: Added <qty> of <item>`, with the timestamp in
/// local wall-clock time at microsecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub recorded_at: NaiveDateTime,
    pub item: ItemId,
    pub qty: Quantity,
}

impl LogEntry {
    pub fn new(item: ItemId, qty: Quantity, recorded_at: NaiveDateTime) -> Self {
        Self {
            recorded_at,
            item,
            qty,
        }
    }

    /// Stamp an entry with the current local time.
    pub fn now(item: ItemId, qty: Quantity) -> Self {
        Self::new(item, qty, Local::now().naive_local())
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.recorded_at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.qty,
            self.item
        )
    }
}
