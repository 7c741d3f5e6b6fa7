//! Text-completion client
//!
//! Follow-up questions can be forwarded to a chat-completions endpoint. The
//! responder only ever needs a single user message and the generated text.

mod chat;
pub mod client;
mod error;
mod types;

use std::sync::Arc;

use tracing::debug;

pub use chat::ChatCompletionsClient;
pub use client::LlmClient;
pub use error::LlmError;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, TokenUsage};

use crate::config::LlmConfig;

/// Create the configured text-completion client
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(model = %config.model, base_url = %config.base_url, "create_client: called");
    Ok(Arc::new(ChatCompletionsClient::from_config(config)?))
}
