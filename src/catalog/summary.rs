// src/catalog/summary.rs

//! Recipe summaries
//!
//! A summary flattens a recipe into the ingredients it needs and the total
//! cook time. Sub-recipes are expanded depth-first into the same accumulator
//! and never appear in the result.
//!
//! # Counting rules
//!
//! - Ingredient quantities are summed across every path that demands them,
//!   in first-encountered order.
//! - An ingredient's cook time is added once per occurrence in the
//!   expansion, not once per unit of quantity.
//! - A sub-recipe is expanded once per occurrence regardless of the quantity
//!   it is required in.
//!
//! # Example
//!
//! ```
//! use cookbook::catalog::{CatalogStore, CookTime, Entry, RequiredItem, resolve};
//!
//! let mut store = CatalogStore::new();
//! store.insert(Entry::ingredient("Egg", CookTime::Whole(3))).unwrap();
//! store.insert(Entry::recipe("Omelette", vec![RequiredItem::new("Egg", 2)])).unwrap();
//!
//! let summary = resolve("Omelette", &store).unwrap();
//! assert_eq!(summary.cook_time, CookTime::Whole(3));
//! assert_eq!(summary.required_ingredients, vec![RequiredItem::new("Egg", 2)]);
//! ```

use crate::catalog::entry::{CookTime, Entry, Recipe, RequiredItem};
use crate::catalog::store::CatalogStore;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Default bound on recipe nesting during a summary
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Flattened view of a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: CookTime,
    pub required_ingredients: Vec<RequiredItem>,
    /// Ingredient name -> position in `required_ingredients`
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl Summary {
    /// Create an empty summary for a recipe
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cook_time: CookTime::default(),
            required_ingredients: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Record one occurrence of an ingredient
    fn add_ingredient(&mut self, name: &str, quantity: u64, cook_time: CookTime) -> Result<()> {
        match self.positions.get(name) {
            Some(&pos) => {
                let item = &mut self.required_ingredients[pos];
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| Error::QuantityOverflow(name.to_string()))?;
            }
            None => {
                self.positions
                    .insert(name.to_string(), self.required_ingredients.len());
                self.required_ingredients
                    .push(RequiredItem::new(name, quantity));
            }
        }
        self.cook_time += cook_time;
        Ok(())
    }

    /// Aggregated quantity of an ingredient, if the summary needs it
    pub fn quantity_of(&self, name: &str) -> Option<u64> {
        self.positions
            .get(name)
            .map(|&pos| self.required_ingredients[pos].quantity)
    }
}

/// Check whether `name` is a recipe in the catalog
pub fn is_recipe(name: &str, store: &CatalogStore) -> bool {
    store.find(name).is_some_and(Entry::is_recipe)
}

/// Resolve a recipe with the default nesting bound
pub fn resolve(name: &str, store: &CatalogStore) -> Result<Summary> {
    SummaryResolver::new(store).resolve(name)
}

/// Render a summary as the mapping handed to the transport layer
pub fn render(summary: &Summary) -> serde_json::Value {
    serde_json::json!({
        "name": summary.name,
        "cookTime": summary.cook_time,
        "requiredIngredients": summary.required_ingredients,
    })
}

/// Depth-first recipe expander over a catalog snapshot
pub struct SummaryResolver<'a> {
    store: &'a CatalogStore,
    max_depth: usize,
}

impl<'a> SummaryResolver<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self {
            store,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bound the number of recipes on one expansion path
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Summarize a recipe requested by a caller
    ///
    /// The root must name a recipe. [`Error::UnknownRecipe`] is kept apart
    /// from the errors for a broken recipe tree.
    pub fn summarize(&self, name: &str) -> Result<Summary> {
        if !is_recipe(name, self.store) {
            return Err(Error::UnknownRecipe(name.to_string()));
        }
        self.resolve(name)
    }

    /// Expand a recipe into a fresh summary
    pub fn resolve(&self, name: &str) -> Result<Summary> {
        let recipe = self
            .store
            .find(name)
            .and_then(Entry::as_recipe)
            .ok_or_else(|| Error::UnknownRecipe(name.to_string()))?;

        let mut summary = Summary::new(name);
        self.expand(recipe, &mut summary)?;
        Ok(summary)
    }

    /// Walk the recipe tree with an explicit stack of `(recipe, next item)`
    /// frames, so nesting depth never grows the call stack
    fn expand(&self, root: &'a Recipe, summary: &mut Summary) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::DepthExceeded {
                name: root.name.clone(),
                limit: self.max_depth,
            });
        }

        let mut frames: Vec<(&'a Recipe, usize)> = vec![(root, 0)];
        let mut in_progress: HashSet<&'a str> = HashSet::from([root.name.as_str()]);

        while let Some(frame) = frames.last_mut() {
            let (recipe, next) = *frame;
            let Some(item) = recipe.required_items.get(next) else {
                frames.pop();
                in_progress.remove(recipe.name.as_str());
                continue;
            };
            frame.1 += 1;

            let entry = self.store.find(&item.name).ok_or_else(|| Error::DanglingReference {
                recipe: recipe.name.clone(),
                missing: item.name.clone(),
            })?;

            match entry {
                Entry::Recipe(sub) => {
                    if in_progress.contains(sub.name.as_str()) {
                        return Err(cycle_error(&frames, &sub.name));
                    }
                    if frames.len() >= self.max_depth {
                        return Err(Error::DepthExceeded {
                            name: sub.name.clone(),
                            limit: self.max_depth,
                        });
                    }
                    in_progress.insert(sub.name.as_str());
                    frames.push((sub, 0));
                }
                Entry::Ingredient(ingredient) => {
                    summary.add_ingredient(&ingredient.name, item.quantity, ingredient.cook_time)?;
                }
            }
        }

        Ok(())
    }
}

/// Build the cycle from the first occurrence of `repeated` on the path
fn cycle_error(frames: &[(&Recipe, usize)], repeated: &str) -> Error {
    let start = frames
        .iter()
        .position(|(r, _)| r.name == repeated)
        .unwrap_or(0);
    let mut cycle: Vec<String> = frames[start..].iter().map(|(r, _)| r.name.clone()).collect();
    cycle.push(repeated.to_string());
    Error::CyclicDefinition { cycle }
}
