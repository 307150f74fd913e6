// src/lib.rs

//! Cookbook
//!
//! In-memory catalog of ingredients and recipes that answers recipe
//! summaries: the fully expanded ingredient list and total cook time.
//!
//! # Architecture
//!
//! - Catalog: entries keyed by unique name, one namespace for ingredients and recipes
//! - Validation: untyped JSON mappings are checked before a typed entry exists
//! - Summaries: depth-first expansion with cycle and depth guards
//! - Transport: optional axum server (`server` feature)

pub mod catalog;
pub mod config;
mod error;
pub mod normalize;

#[cfg(feature = "server")]
pub mod server;

pub use catalog::{
    is_recipe, render, resolve, validate_entry, CatalogStore, CookTime, Cookbook, Entry,
    EntryKind, Ingredient, Recipe, RequiredItem, Summary, SummaryResolver,
};
pub use config::CookbookConfig;
pub use error::{Error, Result};
pub use normalize::normalize;
