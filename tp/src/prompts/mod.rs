//! Prompt Template System
//!
//! Loads and renders `.pmt` (prompt template) files for questions forwarded
//! to the text-completion service.
//!
//! Template loading chain:
//! 1. `.travelplanner/prompts/{name}.pmt` (user override)
//! 2. `prompts/{name}.pmt` (working directory)
//! 3. Embedded fallback in code
//!
//! Templates use Handlebars syntax for variable substitution.

pub mod embedded;
mod loader;

pub use loader::{FollowUpContext, PromptLoader};
