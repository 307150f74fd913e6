// tests/seed.rs

//! Seed file loading.

mod common;

use common::{ingredient, recipe};
use cookbook::{Cookbook, Error};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_seed(entries: &[Value]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entries.json");
    std::fs::write(&path, serde_json::to_string(entries).unwrap()).unwrap();
    (dir, path)
}

#[test]
fn test_load_seed() {
    let (_dir, path) = write_seed(&[
        ingredient("Egg", 3),
        ingredient("Milk", 1),
        recipe("Pancake", &[("Egg", 2), ("Milk", 1)]),
    ]);

    let cookbook = Cookbook::new();
    assert_eq!(cookbook.load_seed(&path).unwrap(), 3);
    assert!(cookbook.is_recipe("Pancake"));

    let summary = cookbook.summarize("Pancake").unwrap();
    assert_eq!(summary.quantity_of("Egg"), Some(2));
}

#[test]
fn test_load_seed_rejects_duplicate() {
    let (_dir, path) = write_seed(&[ingredient("Egg", 3), ingredient("Egg", 4)]);

    let cookbook = Cookbook::new();
    let err = cookbook.load_seed(&path).unwrap_err();
    assert!(matches!(err, Error::Seed { index: 1, .. }));
    assert_eq!(err.kind(), "duplicate_name");
    assert_eq!(cookbook.len(), 1);
}

#[test]
fn test_load_seed_not_a_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entries.json");
    std::fs::write(&path, r#"{"type": "ingredient", "name": "Egg", "cookTime": 3}"#).unwrap();

    let err = Cookbook::new().load_seed(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_load_seed_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Cookbook::new()
        .load_seed(&dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
