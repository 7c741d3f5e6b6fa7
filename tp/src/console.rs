//! Console input/output
//!
//! Every workflow step talks to the user through [`Console`], so the steps can
//! be driven by a real terminal or by a scripted list of answers.

use std::collections::VecDeque;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::error::PlannerError;

/// Line-oriented console used by the workflow steps
pub trait Console {
    /// Prompt for one line. `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PlannerError>;

    /// Print one line of output
    fn say(&mut self, line: &str);
}

/// Interactive console backed by rustyline
pub struct ReadlineConsole {
    editor: DefaultEditor,
}

impl ReadlineConsole {
    pub fn new() -> Result<Self, PlannerError> {
        let editor =
            DefaultEditor::new().map_err(|e| PlannerError::Console(format!("Failed to initialize readline: {}", e)))?;
        Ok(Self { editor })
    }
}

impl Console for ReadlineConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PlannerError> {
        match self.editor.readline(&format!("{} ", prompt.bright_green())) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                println!("^C");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                println!();
                Ok(None)
            }
            Err(err) => Err(PlannerError::Console(format!("Readline error: {}", err))),
        }
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Console that replays canned answers and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inputs: VecDeque<String> = inputs.into_iter().map(Into::into).collect();
        debug!(input_count = inputs.len(), "ScriptedConsole::new: called");
        Self {
            inputs,
            transcript: Vec::new(),
        }
    }

    /// Prompts and output lines, in the order they were produced
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// True if any transcript line contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PlannerError> {
        self.transcript.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_inputs_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.read_line("a?").unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line("b?").unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line("c?").unwrap(), None);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_scripted_console_records_transcript() {
        let mut console = ScriptedConsole::new(["x"]);
        console.say("hello");
        let _ = console.read_line("name?");
        assert_eq!(console.transcript(), &["hello".to_string(), "name?".to_string()]);
        assert!(console.saw("ell"));
        assert!(!console.saw("bye"));
    }
}
