//! Catalog destination records

use serde::{Deserialize, Serialize};

use super::BudgetLevel;

/// A destination from the catalog; read-only once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    /// Theme tags matched against the user's interests
    pub tags: Vec<String>,
    pub budget_level: BudgetLevel,
    /// Best seasons to visit, in catalog order
    pub best_seasons: Vec<String>,
    /// Suggested activities, possibly empty
    #[serde(default)]
    pub activities: Vec<String>,
}

impl Destination {
    /// True when at least one tag appears in `interests`
    pub fn has_any_tag(&self, interests: &[String]) -> bool {
        self.tags.iter().any(|tag| interests.contains(tag))
    }

    /// Best seasons joined for display ("spring, fall")
    pub fn seasons_display(&self) -> String {
        self.best_seasons.join(", ")
    }
}
