//! Follow-up questions about the selected destination
//!
//! ```text
//! AwaitingQuestion --exit phrase / closed input--> Terminated
//! AwaitingQuestion --any other line--> Answering --> AwaitingQuestion
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::FollowUpMode;
use crate::console::Console;
use crate::domain::Destination;
use crate::error::PlannerError;
use crate::llm::{CompletionRequest, LlmClient, Message};
use crate::prompts::{FollowUpContext, PromptLoader};
use crate::weather::WeatherService;

/// Lines that end the follow-up loop (compared case-insensitively)
pub const EXIT_PHRASES: [&str; 3] = ["exit", "no", "no more questions"];

/// Shown when the text-completion service fails
pub const ASSISTANT_FAILURE: &str = "⚠️ Error: Unable to get a response from the travel assistant.";

/// Number of activities listed for an "activities" question
const ACTIVITY_PREVIEW: usize = 5;

pub fn is_exit_phrase(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    EXIT_PHRASES.contains(&lowered.as_str())
}

/// Question categories for keyword answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Weather,
    BestSeason,
    Budget,
    Activities,
    Food,
    History,
    Unknown,
}

/// Classify a question by substring, first match wins
///
/// Checks run in a fixed order, so "what's the weather like when I eat out"
/// is a weather question.
pub fn classify(question: &str) -> Topic {
    let q = question.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| q.contains(n));

    if has(&["weather", "temperature"]) {
        Topic::Weather
    } else if has(&["best season", "when to visit"]) {
        Topic::BestSeason
    } else if has(&["budget"]) {
        Topic::Budget
    } else if has(&["activities", "things to do"]) {
        Topic::Activities
    } else if has(&["food", "eat"]) {
        Topic::Food
    } else if has(&["history", "culture"]) {
        Topic::History
    } else {
        Topic::Unknown
    }
}

/// Follow-up loop states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUpState {
    AwaitingQuestion,
    Answering(String),
    Terminated,
}

/// One answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Answers free-text questions about a destination
pub struct FollowUpResponder {
    mode: FollowUpMode,
    weather: Arc<dyn WeatherService>,
    llm: Arc<dyn LlmClient>,
    prompts: PromptLoader,
    max_tokens: u32,
}

impl FollowUpResponder {
    pub fn new(
        mode: FollowUpMode,
        weather: Arc<dyn WeatherService>,
        llm: Arc<dyn LlmClient>,
        prompts: PromptLoader,
        max_tokens: u32,
    ) -> Self {
        debug!(%mode, max_tokens, "FollowUpResponder::new: called");
        Self {
            mode,
            weather,
            llm,
            prompts,
            max_tokens,
        }
    }

    /// Run the question loop until an exit phrase or closed input
    pub async fn run(
        &self,
        console: &mut dyn Console,
        destination: &Destination,
        history: &mut Vec<Exchange>,
    ) -> Result<(), PlannerError> {
        console.say("");
        console.say("You can ask follow-up questions about your trip!");
        console.say("(Type 'exit' to stop asking questions.)");

        let mut state = FollowUpState::AwaitingQuestion;
        loop {
            state = match state {
                FollowUpState::AwaitingQuestion => {
                    console.say("");
                    match console.read_line("Ask a question:")? {
                        None => FollowUpState::Terminated,
                        Some(line) if is_exit_phrase(&line) => {
                            console.say("Okay! Enjoy your trip! 😊");
                            FollowUpState::Terminated
                        }
                        Some(line) => FollowUpState::Answering(line.trim().to_string()),
                    }
                }
                FollowUpState::Answering(question) => {
                    let answer = self.respond(destination, &question).await;
                    console.say(&answer);
                    history.push(Exchange { question, answer });
                    FollowUpState::AwaitingQuestion
                }
                FollowUpState::Terminated => break,
            };
        }

        info!(questions = history.len(), "Follow-up loop finished");
        Ok(())
    }

    /// Produce the answer text for one question
    pub async fn respond(&self, destination: &Destination, question: &str) -> String {
        debug!(mode = %self.mode, %question, "respond: called");
        match self.mode {
            FollowUpMode::Keywords => self.answer_locally(destination, question).await,
            FollowUpMode::Assistant => self.ask_assistant(destination, question).await,
        }
    }

    async fn answer_locally(&self, destination: &Destination, question: &str) -> String {
        let name = &destination.name;
        let topic = classify(question);
        debug!(?topic, "answer_locally: classified");
        match topic {
            Topic::Weather => format!("🔹 {}", self.weather_line(name).await),
            Topic::BestSeason => format!(
                "🔹 The best seasons to visit {} are {}.",
                name,
                destination.seasons_display()
            ),
            Topic::Budget => format!("🔹 {} has a {} budget level.", name, destination.budget_level),
            Topic::Activities => {
                let mut lines = vec![format!("🔹 Here are some things to do in {}:", name)];
                lines.extend(
                    destination
                        .activities
                        .iter()
                        .take(ACTIVITY_PREVIEW)
                        .map(|a| format!("  - {}", a)),
                );
                lines.join("\n")
            }
            Topic::Food => format!(
                "🔹 {} is known for its amazing food! Try exploring the local markets and restaurants.",
                name
            ),
            Topic::History => format!(
                "🔹 {} has a rich history! Make sure to visit historical landmarks and museums.",
                name
            ),
            Topic::Unknown => {
                "❓ Sorry, I don't have an answer for that. Try asking about activities, best seasons, or budget."
                    .to_string()
            }
        }
    }

    async fn weather_line(&self, city: &str) -> String {
        match self.weather.current(city).await {
            Ok(report) => report.summary(city),
            Err(e) => {
                warn!(%city, error = %e, "Weather lookup failed");
                format!("⚠️ Unable to fetch real-time weather for {}. Try again later.", city)
            }
        }
    }

    async fn ask_assistant(&self, destination: &Destination, question: &str) -> String {
        let prompt = match self
            .prompts
            .followup_prompt(&FollowUpContext::new(&destination.name, question))
        {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(error = %e, "Failed to render follow-up prompt");
                return ASSISTANT_FAILURE.to_string();
            }
        };

        let request = CompletionRequest {
            messages: vec![Message::user(prompt)],
            max_tokens: self.max_tokens,
        };

        match self.llm.complete(request).await {
            Ok(response) => match response.content {
                Some(content) => {
                    debug!(
                        input_tokens = response.usage.input_tokens,
                        output_tokens = response.usage.output_tokens,
                        "ask_assistant: answered"
                    );
                    format!("🔹 {}", content.trim())
                }
                None => {
                    warn!("Assistant returned no content");
                    ASSISTANT_FAILURE.to_string()
                }
            },
            Err(e) => {
                warn!(error = %e, status = ?e.status(), "Assistant request failed");
                ASSISTANT_FAILURE.to_string()
            }
        }
    }
}
