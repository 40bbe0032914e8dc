//! Keyword classification
//!
//! Maps whatever was typed into the search box onto one of the dataset
//! categories. Matching is exact against a small synonym list after trimming
//! and lower-casing; there is no substring or fuzzy matching.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::TravelRecError;

/// Dataset category a search resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Beaches,
    Temples,
    Countries,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Beaches, Category::Temples, Category::Countries];

    /// Normalized keywords accepted for this category
    #[must_use]
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Category::Beaches => &["beach", "beaches"],
            Category::Temples => &["temple", "temples"],
            Category::Countries => &["country", "countries"],
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Beaches => "beaches",
            Category::Temples => "temples",
            Category::Countries => "countries",
        };
        f.write_str(name)
    }
}

/// Result of classifying raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Nothing but whitespace was typed
    Empty,
    /// Non-empty input that is not a known keyword, normalized
    NoMatch(String),
    Matched(Category),
}

impl Classification {
    /// The matched category, or the error a search reports for this input
    pub fn into_category(self) -> crate::Result<Category> {
        match self {
            Classification::Matched(category) => Ok(category),
            Classification::Empty => Err(TravelRecError::EmptyInput),
            Classification::NoMatch(keyword) => Err(TravelRecError::unrecognized(keyword)),
        }
    }
}

/// Normalize search input: trim surrounding whitespace and lower-case
#[must_use]
pub fn normalize(raw_input: &str) -> String {
    raw_input.trim().to_lowercase()
}

/// Classify raw search input
#[must_use]
pub fn classify(raw_input: &str) -> Classification {
    let keyword = normalize(raw_input);
    if keyword.is_empty() {
        return Classification::Empty;
    }

    Category::ALL
        .into_iter()
        .find(|category| category.synonyms().contains(&keyword.as_str()))
        .map_or(Classification::NoMatch(keyword), Classification::Matched)
}
