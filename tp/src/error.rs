//! Planner error types

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can end or interrupt a planning session
///
/// Invalid answers never leave a prompt loop; the collectors re-prompt instead.
/// Service and prompt-template failures are absorbed where the call is made and
/// never appear here.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No destinations match your preferences. Try different criteria.")]
    NoMatchingDestinations,

    #[error("No destination selected. Please restart with different preferences.")]
    NoDestinationSelected,

    #[error("Input closed before the session finished")]
    InputClosed,

    #[error("Workflow step ran before {0} was available")]
    MissingState(&'static str),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Console error: {0}")]
    Console(String),
}

impl PlannerError {
    /// Conditions that end the session with a message instead of a failure report
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PlannerError::NoMatchingDestinations | PlannerError::NoDestinationSelected | PlannerError::InputClosed
        )
    }
}
