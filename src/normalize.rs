// src/normalize.rs

//! Recipe name normalization
//!
//! Turns handwritten names such as `"Riso-Tto"` or `"alpHa-alFRedo"` into
//! display names (`"Riso Tto"`, `"Alpha Alfredo"`).

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]+").unwrap());
static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a raw name
///
/// Hyphen and underscore runs become spaces, everything but ASCII letters
/// and whitespace is dropped, whitespace is collapsed and every word is
/// title-cased. Fails when no letters remain.
pub fn normalize(raw: &str) -> Result<String> {
    let name = SEPARATOR_RE.replace_all(raw, " ");
    let name = DISALLOWED_RE.replace_all(name.trim(), "");
    let name = WHITESPACE_RE.replace_all(&name, " ");
    let name = name.trim();

    if name.is_empty() {
        return Err(Error::EmptyNormalizedName(raw.to_string()));
    }

    Ok(name.split(' ').map(title_case).collect::<Vec<_>>().join(" "))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_ascii_uppercase()
            .to_string()
            + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
