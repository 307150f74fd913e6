// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use cookbook::Cookbook;
use serde_json::{json, Value};

/// Ingredient candidate as it arrives on the wire
pub fn ingredient(name: &str, cook_time: i64) -> Value {
    json!({"type": "ingredient", "name": name, "cookTime": cook_time})
}

/// Recipe candidate as it arrives on the wire
pub fn recipe(name: &str, items: &[(&str, u64)]) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|(item, quantity)| json!({"name": item, "quantity": quantity}))
        .collect();
    json!({"type": "recipe", "name": name, "requiredItems": items})
}

/// Cookbook with the layered R1/R2 recipes:
///
/// - R1 needs 2 x A and 1 x R2
/// - R2 needs 1 x A and 1 x B
/// - A cooks for 3, B for 5
pub fn layered_cookbook() -> Cookbook {
    let cookbook = Cookbook::new();
    for candidate in [
        ingredient("A", 3),
        ingredient("B", 5),
        recipe("R2", &[("A", 1), ("B", 1)]),
        recipe("R1", &[("A", 2), ("R2", 1)]),
    ] {
        cookbook.add_entry(&candidate).unwrap();
    }
    cookbook
}

/// Cookbook modelled on a skibidi spaghetti dinner
pub fn spaghetti_cookbook() -> Cookbook {
    let cookbook = Cookbook::new();
    for candidate in [
        recipe("Skibidi Spaghetti", &[("Meatball", 3), ("Pasta", 1), ("Tomato", 2)]),
        recipe("Meatball", &[("Beef", 2), ("Egg", 1)]),
        recipe("Pasta", &[("Flour", 3), ("Egg", 1)]),
        ingredient("Beef", 5),
        ingredient("Egg", 3),
        ingredient("Flour", 0),
        ingredient("Tomato", 2),
    ] {
        cookbook.add_entry(&candidate).unwrap();
    }
    cookbook
}
