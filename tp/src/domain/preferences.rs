//! User travel preferences

use serde::{Deserialize, Serialize};

use super::{BudgetLevel, Season};

/// Preferences gathered once at the start of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Budget tier, compared exactly against destinations
    pub budget: BudgetLevel,
    /// Trip length in days (always > 0)
    pub duration: u32,
    /// Lowercase interest tags, de-duplicated, in the order given
    pub interests: Vec<String>,
    /// Season the user plans to travel in
    pub season: Season,
}

impl Preferences {
    /// Split a comma-separated interest list into normalized tags
    ///
    /// Tokens are trimmed and lowercased; empty tokens and repeats are dropped.
    pub fn parse_interests(raw: &str) -> Vec<String> {
        let mut interests: Vec<String> = Vec::new();
        for token in raw.split(',') {
            let tag = token.trim().to_lowercase();
            if !tag.is_empty() && !interests.contains(&tag) {
                interests.push(tag);
            }
        }
        interests
    }
}

impl std::fmt::Display for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "budget={}, duration={} days, interests=[{}], season={}",
            self.budget,
            self.duration,
            self.interests.join(", "),
            self.season
        )
    }
}
