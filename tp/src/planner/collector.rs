//! Preference collection
//!
//! Each field is prompted for until it validates. There is no retry limit;
//! only closed input ends the loop early.

use colored::Colorize;
use tracing::debug;

use crate::console::Console;
use crate::domain::{BudgetLevel, Preferences, Season};
use crate::error::PlannerError;

/// Prompt for all four preference fields
pub fn collect_preferences(console: &mut dyn Console) -> Result<Preferences, PlannerError> {
    debug!("collect_preferences: called");
    console.say("");
    console.say("Let's plan your trip! Please answer the following questions:");

    let budget = prompt_until(console, "Enter your budget (low/medium/high):", |raw| {
        raw.parse::<BudgetLevel>()
            .map_err(|_| "Invalid input! Please enter 'low', 'medium', or 'high'.".to_string())
    })?;

    let duration = prompt_until(console, "How many days do you want to travel?", parse_duration)?;

    let interests = prompt_until(
        console,
        "Enter your interests (comma-separated, e.g., culture, food, adventure):",
        |raw| {
            let interests = Preferences::parse_interests(raw);
            if interests.is_empty() {
                Err("Please enter at least one valid interest.".to_string())
            } else {
                Ok(interests)
            }
        },
    )?;

    let season = prompt_until(
        console,
        "What season are you planning to travel? (winter/spring/summer/fall):",
        |raw| {
            raw.parse::<Season>()
                .map_err(|_| "Invalid input! Please enter 'winter', 'spring', 'summer', or 'fall'.".to_string())
        },
    )?;

    let preferences = Preferences {
        budget,
        duration,
        interests,
        season,
    };
    debug!(%preferences, "collect_preferences: complete");
    Ok(preferences)
}

/// Longest trip accepted, in days
pub const MAX_DURATION_DAYS: u32 = 365;

/// Parse a trip length as a positive whole number of days, at most [`MAX_DURATION_DAYS`]
pub(crate) fn parse_duration(raw: &str) -> Result<u32, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "Invalid input! Please enter a valid number.".to_string())?;
    if value <= 0 {
        return Err("Duration must be a positive number.".to_string());
    }
    if value > i64::from(MAX_DURATION_DAYS) {
        return Err(format!("Duration must be at most {} days.", MAX_DURATION_DAYS));
    }
    u32::try_from(value).map_err(|_| "Invalid input! Please enter a valid number.".to_string())
}

/// Re-prompt until `parse` accepts the line; only closed input escapes
fn prompt_until<T>(
    console: &mut dyn Console,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, PlannerError> {
    loop {
        let Some(line) = console.read_line(prompt)? else {
            return Err(PlannerError::InputClosed);
        };
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(message) => {
                debug!(input = %line, %message, "prompt_until: rejected");
                console.say(&format!("{} {}", "❌".red(), message));
            }
        }
    }
}
