//! The fixed demo sequence: load, mutate, query, report, save.

use std::io::Write;

use anyhow::Context;
use serde_json::json;

use stockroom_core::{InventoryError, ItemId};
use stockroom_inventory::{InventoryStore, LogEntry, persistence};

use crate::config::Config;

/// Run the demo against the configured document, writing console output to
/// `out`.
///
/// Inventory errors are reported and the sequence continues; only failures
/// to write to `out` abort it.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<InventoryStore> {
    let mut notice = None;
    let stock = persistence::load_or_else(&config.inventory_file, |e| {
        persistence::trace_failure(e);
        notice = Some(e.to_string());
    });
    if let Some(notice) = notice {
        writeln!(out, "{notice}").context("failed to write load notice")?;
    }
    let mut store = InventoryStore::from_stock(stock);

    let mut logs: Vec<LogEntry> = Vec::new();
    store.add("apple", 10, Some(&mut logs));
    store.add("banana", 5, Some(&mut logs));
    store.add("orange", 15, Some(&mut logs));

    if let Err(e) = store.add_untyped(&json!(123), &json!("ten"), Some(&mut logs)) {
        report(out, &e)?;
    }

    for (item, qty) in [("apple", 3), ("banana", 10), ("grape", 1)] {
        if let Err(e) = store.remove(item, qty) {
            report(out, &e)?;
        }
    }

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    writeln!(
        out,
        "Low items: {}",
        format_items(&store.check_low_items(config.low_threshold))
    )?;

    writeln!(out)?;
    write!(out, "{}", store.report())?;
    writeln!(out)?;

    match store.save_to(&config.inventory_file) {
        Ok(()) => writeln!(out, "Inventory saved.")?,
        Err(e) => report(out, &e)?,
    }

    for entry in &logs {
        tracing::debug!("{entry}");
    }

    Ok(store)
}

fn report(out: &mut impl Write, err: &InventoryError) -> anyhow::Result<()> {
    if err.is_warning() {
        tracing::warn!("{err}");
    } else {
        tracing::error!("{err}");
    }
    writeln!(out, "{err}").context("failed to write diagnostic")?;
    Ok(())
}

fn format_items(items: &[ItemId]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}
