//! Itinerary generation

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::domain::{Destination, Itinerary};

/// Generic plan used when a destination lists no activities
pub fn fallback_activities(name: &str) -> Vec<String> {
    vec![
        format!("Explore the city center of {}.", name),
        format!("Visit famous landmarks in {}.", name),
        "Enjoy local food and cultural experiences.".to_string(),
    ]
}

/// Build a `duration`-day itinerary for `destination`
///
/// The activity list is shuffled once, then day `d` gets `activities[d % len]`.
/// Day 1 therefore starts at the second shuffled entry, and the first entry is
/// only used on days that are multiples of the list length.
pub fn build_itinerary<R: Rng + ?Sized>(destination: &Destination, duration: u32, rng: &mut R) -> Itinerary {
    debug!(name = %destination.name, %duration, "build_itinerary: called");
    let mut activities = if destination.activities.is_empty() {
        debug!("build_itinerary: no activities, using fallback list");
        fallback_activities(&destination.name)
    } else {
        destination.activities.clone()
    };
    activities.shuffle(rng);

    let len = activities.len();
    let plan = (1..=duration as usize).map(|day| activities[day % len].clone()).collect();
    Itinerary::from_activities(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BudgetLevel;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dest(activities: &[&str]) -> Destination {
        Destination {
            name: "Kyoto".to_string(),
            tags: vec!["culture".to_string()],
            budget_level: BudgetLevel::Medium,
            best_seasons: vec!["spring".to_string()],
            activities: activities.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_itinerary_has_one_entry_per_day() {
        let mut rng = StdRng::seed_from_u64(7);
        let itinerary = build_itinerary(&dest(&["a", "b", "c"]), 5, &mut rng);
        assert_eq!(itinerary.labels(), vec!["Day 1", "Day 2", "Day 3", "Day 4", "Day 5"]);
    }

    #[test]
    fn test_wrap_uses_day_modulo_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut shuffled = vec!["a", "b", "c"];
        shuffled.shuffle(&mut StdRng::seed_from_u64(42));

        let itinerary = build_itinerary(&dest(&["a", "b", "c"]), 7, &mut rng);
        let got: Vec<&str> = itinerary.days().iter().map(|d| d.activity.as_str()).collect();

        // Day d -> shuffled[d % 3]: 1,2,0,1,2,0,1
        let expected: Vec<&str> = [1, 2, 0, 1, 2, 0, 1].iter().map(|&i| shuffled[i]).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_single_activity_repeats() {
        let mut rng = StdRng::seed_from_u64(1);
        let itinerary = build_itinerary(&dest(&["Tea ceremony"]), 3, &mut rng);
        assert!(itinerary.days().iter().all(|d| d.activity == "Tea ceremony"));
    }

    #[test]
    fn test_empty_activities_use_fallback() {
        let mut rng = StdRng::seed_from_u64(3);
        let itinerary = build_itinerary(&dest(&[]), 4, &mut rng);
        let fallback = fallback_activities("Kyoto");

        assert_eq!(itinerary.len(), 4);
        for day in itinerary.days() {
            assert!(fallback.contains(&day.activity));
        }
        assert!(fallback[0].contains("Kyoto"));
        assert!(fallback[1].contains("Kyoto"));
    }

    #[test]
    fn test_destination_is_not_mutated() {
        let destination = dest(&["a", "b", "c", "d"]);
        let before = destination.clone();
        let _ = build_itinerary(&destination, 10, &mut StdRng::seed_from_u64(9));
        assert_eq!(destination, before);
    }

    proptest! {
        #[test]
        fn prop_days_and_activities(
            activities in prop::collection::vec("[a-z]{1,8}", 0..8),
            duration in 1u32..40,
            seed in any::<u64>(),
        ) {
            let refs: Vec<&str> = activities.iter().map(String::as_str).collect();
            let destination = dest(&refs);
            let source = if activities.is_empty() { fallback_activities("Kyoto") } else { activities.clone() };

            let itinerary = build_itinerary(&destination, duration, &mut StdRng::seed_from_u64(seed));

            prop_assert_eq!(itinerary.len(), duration as usize);
            let expected_labels: Vec<String> = (1..=duration).map(|d| format!("Day {}", d)).collect();
            prop_assert_eq!(itinerary.labels(), expected_labels);
            for day in itinerary.days() {
                prop_assert!(source.contains(&day.activity));
            }
        }

        #[test]
        fn prop_full_cycle_uses_every_activity_once(
            activities in prop::collection::hash_set("[a-z]{1,8}", 1..8),
            seed in any::<u64>(),
        ) {
            let mut sorted: Vec<String> = activities.into_iter().collect();
            sorted.sort();
            let refs: Vec<&str> = sorted.iter().map(String::as_str).collect();

            let itinerary = build_itinerary(&dest(&refs), sorted.len() as u32, &mut StdRng::seed_from_u64(seed));
            let mut used: Vec<String> = itinerary.days().iter().map(|d| d.activity.clone()).collect();
            used.sort();
            prop_assert_eq!(used, sorted);
        }
    }
}
