//! Domain types for the travel planner
//!
//! Plain data that flows between workflow steps: the user's preferences,
//! catalog destinations, and the generated itinerary. Nothing here performs I/O.

mod budget;
mod destination;
mod itinerary;
mod preferences;
mod season;

pub use budget::BudgetLevel;
pub use destination::Destination;
pub use itinerary::{Itinerary, ItineraryDay};
pub use preferences::Preferences;
pub use season::Season;
