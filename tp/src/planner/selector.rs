//! Destination selection

use colored::Colorize;
use tracing::debug;

use crate::console::Console;
use crate::domain::Destination;
use crate::error::PlannerError;

/// Upper-case the first letter of each alphabetic run and lower-case the rest
///
/// "rio de janeiro" becomes "Rio De Janeiro"; "o'neil" becomes "O'Neil".
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}

/// Normalize a typed destination name before comparison
pub fn normalize_choice(input: &str) -> String {
    title_case(input.trim())
}

/// Index of the candidate whose name matches `input`, ignoring case
fn find_match(candidates: &[Destination], input: &str) -> Option<usize> {
    let wanted = normalize_choice(input).to_lowercase();
    candidates.iter().position(|d| d.name.to_lowercase() == wanted)
}

/// Show the candidates and prompt until one is named
///
/// Returns an index into `candidates`, so the selection always refers to an
/// entry of the filtered list.
pub fn select_destination(console: &mut dyn Console, candidates: &[Destination]) -> Result<usize, PlannerError> {
    debug!(candidate_count = candidates.len(), "select_destination: called");
    if candidates.is_empty() {
        return Err(PlannerError::NoDestinationSelected);
    }

    let names: Vec<&str> = candidates.iter().map(|d| d.name.as_str()).collect();
    console.say("");
    console.say(&format!("{} {}", "Recommended Destinations:".bright_cyan(), names.join(", ")));

    loop {
        console.say("");
        let Some(line) = console.read_line("Which destination do you want to visit from the list?")? else {
            return Err(PlannerError::NoDestinationSelected);
        };
        if let Some(index) = find_match(candidates, &line) {
            debug!(name = %candidates[index].name, "select_destination: matched");
            return Ok(index);
        }
        console.say(&format!(
            "{} Invalid choice! Please select from the recommended list.",
            "❌".red()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::domain::BudgetLevel;

    fn dest(name: &str) -> Destination {
        Destination {
            name: name.to_string(),
            tags: vec!["culture".to_string()],
            budget_level: BudgetLevel::Medium,
            best_seasons: vec![],
            activities: vec![],
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("lisbon"), "Lisbon");
        assert_eq!(title_case("NEW YORK"), "New York");
        assert_eq!(title_case("rio de janeiro"), "Rio De Janeiro");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("stay-at-home 2day"), "Stay-At-Home 2Day");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_normalize_choice_trims() {
        assert_eq!(normalize_choice("  kyoto \n"), "Kyoto");
    }

    #[test]
    fn test_select_matches_case_insensitively() {
        let candidates = vec![dest("Lisbon"), dest("Kyoto")];
        let mut console = ScriptedConsole::new(["  KYOTO  "]);
        assert_eq!(select_destination(&mut console, &candidates).unwrap(), 1);
        assert!(console.saw("Lisbon, Kyoto"));
    }

    #[test]
    fn test_select_multi_word_name_with_lowercase_particle() {
        let candidates = vec![dest("Rio de Janeiro")];
        let mut console = ScriptedConsole::new(["rio de janeiro"]);
        assert_eq!(select_destination(&mut console, &candidates).unwrap(), 0);
    }

    #[test]
    fn test_select_reprompts_on_unknown_name() {
        let candidates = vec![dest("Lisbon"), dest("Kyoto")];
        let mut console = ScriptedConsole::new(["Paris", "", "lisbon"]);
        assert_eq!(select_destination(&mut console, &candidates).unwrap(), 0);
        let rejections = console
            .transcript()
            .iter()
            .filter(|l| l.contains("Invalid choice!"))
            .count();
        assert_eq!(rejections, 2);
    }

    #[test]
    fn test_select_from_empty_list_is_fatal() {
        let mut console = ScriptedConsole::new(["Lisbon"]);
        let result = select_destination(&mut console, &[]);
        assert!(matches!(result, Err(PlannerError::NoDestinationSelected)));
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn test_closed_input_selects_nothing() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let result = select_destination(&mut console, &[dest("Lisbon")]);
        assert!(matches!(result, Err(PlannerError::NoDestinationSelected)));
    }
}
