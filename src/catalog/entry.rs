// src/catalog/entry.rs

//! Cookbook entry types
//!
//! Entries arrive as untyped mappings and are only constructed here after the
//! validator has checked every attribute, so the types below never hold a
//! negative cook time, a zero quantity or a repeated required item.

use serde::Serialize;
use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

/// Kind tag carried in the `type` attribute of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Ingredient,
    Recipe,
}

impl EntryKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Ingredient => "ingredient",
            EntryKind::Recipe => "recipe",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ingredient" => Ok(EntryKind::Ingredient),
            "recipe" => Ok(EntryKind::Recipe),
            other => Err(format!("unknown entry type '{}'", other)),
        }
    }
}

/// Cook time of an ingredient, or the accumulated cook time of a summary
///
/// Integer cook times stay integers; once a fractional value is added the
/// total becomes fractional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CookTime {
    Whole(u64),
    Fractional(f64),
}

impl CookTime {
    /// Build a cook time from a JSON number, rejecting negatives
    pub fn from_number(n: &serde_json::Number) -> Option<Self> {
        if let Some(whole) = n.as_u64() {
            return Some(CookTime::Whole(whole));
        }
        match n.as_f64() {
            Some(value) if value >= 0.0 => Some(CookTime::Fractional(value)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            CookTime::Whole(v) => v as f64,
            CookTime::Fractional(v) => v,
        }
    }
}

impl Default for CookTime {
    fn default() -> Self {
        CookTime::Whole(0)
    }
}

impl AddAssign for CookTime {
    fn add_assign(&mut self, rhs: Self) {
        *self = match (*self, rhs) {
            (CookTime::Whole(a), CookTime::Whole(b)) => match a.checked_add(b) {
                Some(sum) => CookTime::Whole(sum),
                None => CookTime::Fractional(a as f64 + b as f64),
            },
            (lhs, rhs) => CookTime::Fractional(lhs.as_f64() + rhs.as_f64()),
        };
    }
}

impl fmt::Display for CookTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookTime::Whole(v) => write!(f, "{}", v),
            CookTime::Fractional(v) => write!(f, "{}", v),
        }
    }
}

/// A demand for some quantity of a named item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A base entry with an intrinsic cook time
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub cook_time: CookTime,
}

/// A composite entry defined by its required items
///
/// Required item names are unique within one recipe. They are not checked
/// against the cookbook until the recipe is summarized.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A named cookbook entry
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// Create an ingredient entry
    pub fn ingredient(name: impl Into<String>, cook_time: CookTime) -> Self {
        Entry::Ingredient(Ingredient {
            name: name.into(),
            cook_time,
        })
    }

    /// Create a recipe entry
    pub fn recipe(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Entry::Recipe(Recipe {
            name: name.into(),
            required_items,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(i) => &i.name,
            Entry::Recipe(r) => &r.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Ingredient(_) => EntryKind::Ingredient,
            Entry::Recipe(_) => EntryKind::Recipe,
        }
    }

    pub fn is_recipe(&self) -> bool {
        matches!(self, Entry::Recipe(_))
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Entry::Recipe(r) => Some(r),
            Entry::Ingredient(_) => None,
        }
    }

    pub fn as_ingredient(&self) -> Option<&Ingredient> {
        match self {
            Entry::Ingredient(i) => Some(i),
            Entry::Recipe(_) => None,
        }
    }
}
