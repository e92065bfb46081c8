//! JSON document persistence for stock.
//!
//! The document is a single object mapping item ids to integer quantities,
//! written with 4-space indentation. Writes overwrite the file in place; they
//! are not atomic, so a crash mid-write can leave a truncated document behind.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use stockroom_core::{InventoryError, ItemId, Quantity};

/// Default location of the persisted document.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Item id -> quantity mapping, ordered by item id.
pub type Stock = BTreeMap<ItemId, Quantity>;

/// Failure to read or write the persisted document.
///
/// `Display` yields the operator-facing line for each case.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Info: {path} not found. Starting with empty inventory.")]
    Missing { path: String },

    #[error("Error: Could not decode {path}. Starting empty.")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error: Could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error: Could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error: Could not encode inventory: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PersistenceError {
    /// Missing files are the expected cold-start case, not a failure.
    pub fn is_cold_start(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

impl From<PersistenceError> for InventoryError {
    fn from(value: PersistenceError) -> Self {
        InventoryError::persistence(value.to_string())
    }
}

/// Read and parse the document at `path`.
pub fn try_load(path: impl AsRef<Path>) -> Result<Stock, PersistenceError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PersistenceError::Missing {
            path: display.clone(),
        },
        _ => PersistenceError::Read {
            path: display.clone(),
            source,
        },
    })?;

    serde_json::from_slice(&bytes).map_err(|source| PersistenceError::Corrupt {
        path: display,
        source,
    })
}

/// Load the document at `path`, recovering every failure as empty stock.
///
/// Failures are logged: a missing file at `info`, anything else at `error`.
pub fn load(path: impl AsRef<Path>) -> Stock {
    load_or_else(path, trace_failure)
}

/// Like [`load`], but hands any failure to `on_failure` before falling back
/// to empty stock.
pub fn load_or_else(path: impl AsRef<Path>, on_failure: impl FnOnce(&PersistenceError)) -> Stock {
    let path = path.as_ref();
    match try_load(path) {
        Ok(stock) => {
            tracing::info!(path = %path.display(), items = stock.len(), "inventory loaded");
            stock
        }
        Err(e) => {
            on_failure(&e);
            Stock::new()
        }
    }
}

/// Log a load/save failure at the level its kind warrants.
pub fn trace_failure(e: &PersistenceError) {
    if e.is_cold_start() {
        tracing::info!("{e}");
    } else {
        tracing::error!(error = ?e, "{e}");
    }
}

/// Render stock as the persisted document text.
pub fn to_document(stock: &Stock) -> Result<String, PersistenceError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    stock.serialize(&mut ser)?;
    let document = String::from_utf8(buf)
        .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok(document)
}

/// Write stock to `path`, replacing any existing contents.
pub fn save(stock: &Stock, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let document = to_document(stock)?;

    std::fs::write(path, document).map_err(|source| PersistenceError::Write {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), items = stock.len(), "inventory saved");
    Ok(())
}
