//! Expense categories
//!
//! Categories are a closed set fixed at compile time. Every lookup keyed by
//! category (display color, chart slice, per-category totals) is an
//! exhaustive `match`, so there is no "unknown category" case at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The subject area of an expense or budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
    Personal,
    Other,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Healthcare,
        Category::Education,
        Category::Personal,
        Category::Other,
    ];

    /// Get all categories in order
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Display name, identical to the persisted tag
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }

    /// Fixed display color as a `#RRGGBB` hex string
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "#4F46E5",
            Self::Transportation => "#10B981",
            Self::Housing => "#F59E0B",
            Self::Utilities => "#6366F1",
            Self::Entertainment => "#EC4899",
            Self::Shopping => "#8B5CF6",
            Self::Healthcare => "#3B82F6",
            Self::Education => "#14B8A6",
            Self::Personal => "#F43F5E",
            Self::Other => "#6B7280",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when text does not name a known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: '{}'", self.0)
    }
}

impl std::error::Error for CategoryParseError {}
