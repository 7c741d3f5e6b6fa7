//! Session workflow
//!
//! A fixed sequence of steps over an accumulating [`SessionState`]. Each step
//! only adds to the state; nothing is removed once set.

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use super::{Exchange, FollowUpResponder, build_itinerary, collect_preferences, filter_destinations, select_destination};
use crate::catalog::Catalog;
use crate::console::Console;
use crate::domain::{Destination, Itinerary, Preferences};
use crate::error::PlannerError;

/// Workflow steps, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CollectPreferences,
    FindDestinations,
    SelectDestination,
    CreateItinerary,
    FollowUp,
    Done,
}

impl Step {
    /// The step that always follows this one
    pub fn next(self) -> Step {
        match self {
            Step::CollectPreferences => Step::FindDestinations,
            Step::FindDestinations => Step::SelectDestination,
            Step::SelectDestination => Step::CreateItinerary,
            Step::CreateItinerary => Step::FollowUp,
            Step::FollowUp | Step::Done => Step::Done,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::CollectPreferences => "collect-preferences",
            Step::FindDestinations => "find-destinations",
            Step::SelectDestination => "select-destination",
            Step::CreateItinerary => "create-itinerary",
            Step::FollowUp => "follow-up",
            Step::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Everything gathered during one planning session
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    preferences: Option<Preferences>,
    destinations: Vec<Destination>,
    /// Index into `destinations`
    selected: Option<usize>,
    itinerary: Option<Itinerary>,
    history: Vec<Exchange>,
}

impl SessionState {
    pub fn preferences(&self) -> Option<&Preferences> {
        self.preferences.as_ref()
    }

    /// Candidates produced by the filter step
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// The chosen destination; always an element of [`destinations`](Self::destinations)
    pub fn selected_destination(&self) -> Option<&Destination> {
        self.selected.and_then(|i| self.destinations.get(i))
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    /// Follow-up questions and the answers given
    pub fn history(&self) -> &[Exchange] {
        &self.history
    }
}

/// The planning workflow and its collaborators
///
/// Built once at startup and run once per session.
pub struct Workflow {
    catalog: Catalog,
    responder: FollowUpResponder,
    rng: StdRng,
}

impl Workflow {
    pub fn new(catalog: Catalog, responder: FollowUpResponder) -> Self {
        debug!(catalog_size = catalog.len(), "Workflow::new: called");
        Self {
            catalog,
            responder,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed random source for the itinerary shuffle
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Drive every step in order until the session is done
    pub async fn run(&mut self, console: &mut dyn Console) -> Result<SessionState, PlannerError> {
        let mut state = SessionState::default();
        let mut step = Step::CollectPreferences;
        while step != Step::Done {
            info!(%step, "Entering workflow step");
            self.advance(step, &mut state, console).await?;
            step = step.next();
        }
        info!("Workflow complete");
        Ok(state)
    }

    /// Execute one step against the session state
    async fn advance(
        &mut self,
        step: Step,
        state: &mut SessionState,
        console: &mut dyn Console,
    ) -> Result<(), PlannerError> {
        debug!(%step, "advance: called");
        match step {
            Step::CollectPreferences => {
                let preferences = collect_preferences(console)?;
                console.say("");
                console.say(&format!("{} {}", "Preferences:".dimmed(), preferences));
                state.preferences = Some(preferences);
            }
            Step::FindDestinations => {
                let preferences = state.preferences.as_ref().ok_or(PlannerError::MissingState("preferences"))?;
                let destinations = filter_destinations(preferences, self.catalog.destinations());
                if destinations.is_empty() {
                    return Err(PlannerError::NoMatchingDestinations);
                }
                state.destinations = destinations;
            }
            Step::SelectDestination => {
                state.selected = Some(select_destination(console, &state.destinations)?);
            }
            Step::CreateItinerary => {
                let destination = state.selected_destination().ok_or(PlannerError::NoDestinationSelected)?;
                let duration = state
                    .preferences
                    .as_ref()
                    .ok_or(PlannerError::MissingState("preferences"))?
                    .duration;
                let itinerary = build_itinerary(destination, duration, &mut self.rng);
                print_itinerary(console, destination, duration, &itinerary);
                state.itinerary = Some(itinerary);
            }
            Step::FollowUp => {
                let destination = state
                    .selected
                    .and_then(|i| state.destinations.get(i))
                    .ok_or(PlannerError::NoDestinationSelected)?;
                self.responder.run(console, destination, &mut state.history).await?;
            }
            Step::Done => {}
        }
        Ok(())
    }
}

fn print_itinerary(console: &mut dyn Console, destination: &Destination, duration: u32, itinerary: &Itinerary) {
    console.say("");
    console.say(&format!("Your planned trip to {}:", destination.name.bright_cyan()));
    console.say("");
    console.say(&format!("✅ Best seasons to visit: {}", destination.seasons_display()));
    console.say(&format!("✅ Budget level: {}", destination.budget_level));
    console.say(&format!("✅ Your {}-day itinerary:", duration));
    for day in itinerary.days() {
        console.say(&format!("  - {}: {}", day.label(), day.activity));
    }
}
