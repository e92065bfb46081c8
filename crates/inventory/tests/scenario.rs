use serde_json::json;
use stockroom_core::{InventoryError, ItemId};
use stockroom_inventory::{InventoryStore, LogEntry, persistence};

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    fn file(&self) -> std::path::PathBuf {
        self.dir.path().join("inventory.json")
    }
}

#[test]
fn demo_sequence_from_cold_start() {
    let ws = Workspace::new();
    let mut store = InventoryStore::load_from(ws.file());
    assert!(store.is_empty());

    let mut logs: Vec<LogEntry> = Vec::new();
    store.add("apple", 10, Some(&mut logs));
    store.add("banana", 5, Some(&mut logs));
    store.add("orange", 15, Some(&mut logs));

    let invalid = store.add_untyped(&json!(123), &json!("ten"), Some(&mut logs));
    assert!(matches!(invalid, Err(InventoryError::InvalidQuantity { .. })));
    assert_eq!(logs.len(), 3);

    store.remove("apple", 3).unwrap();
    store.remove("banana", 10).unwrap();
    let warning = store.remove("grape", 1).unwrap_err();
    assert_eq!(
        warning.to_string(),
        "Warning: Item 'grape' not in stock, cannot remove."
    );

    assert_eq!(store.get_quantity("apple"), 7);
    assert_eq!(store.get_quantity("banana"), 0);

    let low = store.check_low_items(10);
    assert_eq!(low, vec![ItemId::parse("apple").unwrap()]);

    store.save_to(ws.file()).unwrap();

    let on_disk = std::fs::read_to_string(ws.file()).unwrap();
    assert_eq!(on_disk, "{\n    \"apple\": 7,\n    \"orange\": 15\n}");

    let reloaded = InventoryStore::load_from(ws.file());
    assert_eq!(reloaded, store);
    assert_eq!(reloaded.report().lines().len(), 4);
}

#[test]
fn second_run_builds_on_saved_state() {
    let ws = Workspace::new();

    let mut first = InventoryStore::load_from(ws.file());
    first.add("apple", 10, None);
    first.save_to(ws.file()).unwrap();

    let mut second = InventoryStore::load_from(ws.file());
    second.add("apple", 10, None);
    assert_eq!(second.get_quantity("apple"), 20);
}

#[test]
fn corrupt_document_starts_empty_and_is_replaced_on_save() {
    let ws = Workspace::new();
    std::fs::write(ws.file(), "not json at all").unwrap();

    let mut store = InventoryStore::load_from(ws.file());
    assert!(store.is_empty());

    store.add("pear", 2, None);
    store.save_to(ws.file()).unwrap();

    let stock = persistence::try_load(ws.file()).unwrap();
    assert_eq!(stock.get("pear"), Some(&2));
}
