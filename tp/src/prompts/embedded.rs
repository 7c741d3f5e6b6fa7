//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Follow-up question prompt
pub const FOLLOWUP: &str = include_str!("../../prompts/followup.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "followup" => Some(FOLLOWUP),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}
