// src/catalog/validate.rs

//! Entry admission
//!
//! Candidates arrive as untyped JSON mappings. Every attribute is checked
//! before a typed [`Entry`] is built, and the check is pure with respect to
//! the catalog: inserting the accepted entry is up to the caller.

use crate::catalog::entry::{CookTime, Entry, EntryKind, RequiredItem};
use crate::catalog::store::CatalogStore;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Validate a candidate entry against the current catalog
///
/// Rejects with [`Error::MalformedEntry`] when the candidate has the wrong
/// shape and with [`Error::DuplicateName`] when its name is already taken.
pub fn validate_entry(candidate: &Value, store: &CatalogStore) -> Result<Entry> {
    let fields = candidate
        .as_object()
        .ok_or_else(|| Error::malformed("entry must be a JSON object"))?;

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::malformed("'name' must be a string"))?;

    let kind = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::malformed("'type' must be \"ingredient\" or \"recipe\""))?
        .parse::<EntryKind>()
        .map_err(Error::MalformedEntry)?;

    let entry = match kind {
        EntryKind::Ingredient => Entry::ingredient(name, parse_cook_time(fields)?),
        EntryKind::Recipe => Entry::recipe(name, parse_required_items(fields)?),
    };

    if store.exists(name) {
        return Err(Error::DuplicateName(name.to_string()));
    }

    Ok(entry)
}

fn parse_cook_time(fields: &Map<String, Value>) -> Result<CookTime> {
    match fields.get("cookTime") {
        Some(Value::Number(n)) => CookTime::from_number(n)
            .ok_or_else(|| Error::malformed(format!("'cookTime' must not be negative, got {}", n))),
        _ => Err(Error::malformed("'cookTime' must be a number")),
    }
}

fn parse_required_items(fields: &Map<String, Value>) -> Result<Vec<RequiredItem>> {
    let items = fields
        .get("requiredItems")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::malformed("'requiredItems' must be a list"))?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut required = Vec::with_capacity(items.len());

    for item in items {
        let item = parse_required_item(item)?;
        if !seen.insert(item.name.clone()) {
            return Err(Error::malformed(format!(
                "required item '{}' is listed more than once",
                item.name
            )));
        }
        required.push(item);
    }

    Ok(required)
}

fn parse_required_item(item: &Value) -> Result<RequiredItem> {
    let fields = item
        .as_object()
        .ok_or_else(|| Error::malformed("required item must be a JSON object"))?;

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::malformed("required item 'name' must be a string"))?;

    // Only integer literals count: 2.0, true and "2" are all rejected
    let quantity = match fields.get("quantity") {
        Some(Value::Number(n)) => n.as_u64(),
        _ => None,
    };
    match quantity {
        Some(quantity) if quantity >= 1 => Ok(RequiredItem::new(name, quantity)),
        _ => Err(Error::malformed(format!(
            "required item '{}' must have a positive integer 'quantity'",
            name
        ))),
    }
}
