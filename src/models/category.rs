//! Expense categories
//!
//! A small fixed set of built-in categories plus free text. Categories compare
//! by their exact text, so "Food" and "food" are different categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category attached to an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Other,
    /// Any other non-empty label
    Custom(String),
}

impl Category {
    /// Built-in categories offered to front ends by default
    pub const BUILT_IN: [Category; 3] = [Category::Food, Category::Transport, Category::Other];

    /// Get the category's text
    pub fn as_str(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Other => "Other",
            Self::Custom(name) => name,
        }
    }

    pub fn is_built_in(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Check whether this category is the one named by `label`
    pub fn matches(&self, label: &str) -> bool {
        self.as_str() == label
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Food" => Self::Food,
            "Transport" => Self::Transport,
            "Other" => Self::Other,
            _ => Self::Custom(s),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_recognized() {
        assert_eq!(Category::from("Food"), Category::Food);
        assert_eq!(Category::from("Transport"), Category::Transport);
        assert_eq!(Category::from("Other"), Category::Other);
        assert!(Category::Food.is_built_in());
    }

    #[test]
    fn test_free_text() {
        let c = Category::from("Gifts");
        assert_eq!(c, Category::Custom("Gifts".into()));
        assert!(!c.is_built_in());
        assert_eq!(c.to_string(), "Gifts");
    }

    #[test]
    fn test_exact_match() {
        assert!(Category::Food.matches("Food"));
        assert!(!Category::Food.matches("food"));
        assert_eq!(Category::from("food"), Category::Custom("food".into()));
    }

    #[test]
    fn test_serializes_as_text() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, r#""Transport""#);

        let c: Category = serde_json::from_str(r#""Books""#).unwrap();
        assert_eq!(c, Category::Custom("Books".into()));
    }
}
