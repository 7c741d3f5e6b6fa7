//! Day-by-day itinerary

use serde::{Deserialize, Serialize};

/// One itinerary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    pub activity: String,
}

impl ItineraryDay {
    /// Display label, e.g. "Day 3"
    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }
}

/// Ordered mapping from "Day 1".."Day N" to an activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    days: Vec<ItineraryDay>,
}

impl Itinerary {
    /// Build from activities listed in day order (index 0 is Day 1)
    pub fn from_activities(activities: Vec<String>) -> Self {
        let days = activities
            .into_iter()
            .zip(1u32..)
            .map(|(activity, day)| ItineraryDay { day, activity })
            .collect();
        Self { days }
    }

    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Look up an activity by its label ("Day 2")
    pub fn get(&self, label: &str) -> Option<&str> {
        let day: u32 = label.strip_prefix("Day ")?.parse().ok()?;
        self.days
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.activity.as_str())
    }

    /// Labels in day order
    pub fn labels(&self) -> Vec<String> {
        self.days.iter().map(ItineraryDay::label).collect()
    }
}
