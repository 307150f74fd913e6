// src/catalog/mod.rs

//! The cookbook catalog
//!
//! # Culinary Terminology
//!
//! - **Ingredient**: A base entry with an intrinsic cook time
//! - **Recipe**: A composite entry listing required items by name and quantity
//! - **Required item**: A demand for a quantity of an ingredient or recipe
//! - **Summary**: A recipe flattened into ingredient totals and cook time
//!
//! # Flow
//!
//! Candidates go untyped mapping -> [`validate_entry`] -> [`Entry`] ->
//! [`CatalogStore::insert`]. Summaries walk the stored recipes through a
//! [`SummaryResolver`]. [`Cookbook`] ties both to a shared lock.

mod entry;
mod store;
mod summary;
mod validate;

pub use entry::{CookTime, Entry, EntryKind, Ingredient, Recipe, RequiredItem};
pub use store::{CatalogStore, Cookbook};
pub use summary::{is_recipe, render, resolve, Summary, SummaryResolver, DEFAULT_MAX_DEPTH};
pub use validate::validate_entry;
