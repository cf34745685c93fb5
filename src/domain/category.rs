//! The closed set of expense categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Classification label attached to every expense.
///
/// The declaration order is the canonical order used by the form selector,
/// the summary aggregator, and the charts. Adding a category means adding a
/// variant here and extending [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Food, Category::Travel, Category::Entertainment];

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Entertainment => "Entertainment",
        }
    }

    /// Position of the category within [`Category::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Category::Food => 0,
            Category::Travel => 1,
            Category::Entertainment => 2,
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|category| category.label()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownCategory(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" TRAVEL ".parse::<Category>().unwrap(), Category::Travel);
        assert_eq!(
            "Entertainment".parse::<Category>().unwrap(),
            Category::Entertainment
        );
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "Rent".parse::<Category>().expect_err("Rent is not a category");
        assert!(matches!(err, ValidationError::UnknownCategory(ref label) if label == "Rent"));
    }

    #[test]
    fn ordinals_follow_declaration_order() {
        for (idx, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.ordinal(), idx);
        }
    }

    #[test]
    fn serializes_as_plain_label() {
        let json = serde_json::to_string(&Category::Travel).unwrap();
        assert_eq!(json, "\"Travel\"");
    }
}
