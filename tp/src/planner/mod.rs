//! Planning workflow
//!
//! Five steps run strictly in order on a single thread:
//!
//! ```text
//! collect preferences -> find destinations -> select destination
//!     -> create itinerary -> follow-up questions
//! ```
//!
//! The pure steps ([`filter_destinations`], [`build_itinerary`]) take their
//! inputs explicitly; the interactive steps talk through a [`Console`](crate::console::Console).

mod collector;
mod filter;
mod followup;
mod itinerary;
mod selector;
mod workflow;

pub use collector::collect_preferences;
pub use filter::filter_destinations;
pub use followup::{EXIT_PHRASES, Exchange, FollowUpResponder, FollowUpState, Topic, classify, is_exit_phrase};
pub use itinerary::{build_itinerary, fallback_activities};
pub use selector::{normalize_choice, select_destination, title_case};
pub use workflow::{SessionState, Step, Workflow};
