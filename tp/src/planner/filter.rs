//! Destination filtering

use tracing::debug;

use crate::domain::{Destination, Preferences};

/// Destinations with the same budget tier and at least one shared interest tag
///
/// Results keep catalog order. This never fails; an empty result is handled
/// by the workflow.
pub fn filter_destinations(preferences: &Preferences, catalog: &[Destination]) -> Vec<Destination> {
    let matches: Vec<Destination> = catalog
        .iter()
        .filter(|d| d.budget_level == preferences.budget && d.has_any_tag(&preferences.interests))
        .cloned()
        .collect();
    debug!(
        catalog_size = catalog.len(),
        match_count = matches.len(),
        "filter_destinations: complete"
    );
    matches
}
