use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{ExpenseError, Result};

/// Closed set of spending categories.
///
/// Unknown strings in stored data and records with no category at all both
/// fall back to `Other`; legacy documents are never rejected over a category.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub enum Category {
    Food,
    Transport,
    Tuition,
    Entertainment,
    Utilities,
    #[default]
    Other,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Tuition,
        Category::Entertainment,
        Category::Utilities,
        Category::Other,
    ];

    /// Resolves a 1-based menu selection into a category.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index.wrapping_sub(1))
            .copied()
            .ok_or_else(|| ExpenseError::InvalidCategory(index.to_string()))
    }

    /// Maps a stored category name, falling back to `Other` for anything
    /// outside the fixed set.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name() == name)
            .unwrap_or(Category::Other)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Tuition => "Tuition",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::from_name(&raw))
    }
}
